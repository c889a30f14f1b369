//! NewsHub - A Tech News Aggregation Core
//!
//! This crate pulls tech-news articles from a backend aggregator (an RSS
//! proxy and a Hacker News proxy), normalizes them into one record shape,
//! and exposes dashboard state: category filter, free-text search, and a
//! reader selection over the merged list.

pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod hub;
pub mod model;
pub mod normalize;
pub mod sources;
