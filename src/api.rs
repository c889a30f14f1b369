//! HTTP client for the backend aggregator.
//!
//! The backend proxies RSS feeds and the Hacker News firebase API into a
//! uniform JSON envelope: `{ total, articles: [...] }`. Upstream failures
//! are reported two ways: a non-2xx status, or a 200 whose envelope has an
//! `error` string and no articles. Both surface as errors here.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{HubError, HubResult};

const RSS_PATH: &str = "/api/v1/rss/";
const HACKER_NEWS_PATH: &str = "/api/v1/hacker-news/";

/// One item from the RSS proxy. Field names follow the wire format; feeds
/// differ on which of the optional fields they populate.
#[derive(Debug, Clone, Deserialize)]
pub struct RssItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, alias = "pubDate")]
    pub published: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub guid: Option<String>,
}

/// One story from the Hacker News proxy.
#[derive(Debug, Clone, Deserialize)]
pub struct HnStory {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub by: Option<String>,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub descendants: i64,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    #[allow(dead_code)]
    total: u64,
    #[serde(default = "Vec::new")]
    articles: Vec<T>,
    #[serde(default)]
    error: Option<String>,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("NewsHub/1.0 (Tech News Aggregator)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one RSS feed through the proxy.
    pub async fn fetch_rss(&self, feed_url: &str, limit: u32) -> HubResult<Vec<RssItem>> {
        let url = format!("{}{}", self.base_url, RSS_PATH);
        let limit = limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("url", feed_url), ("limit", &limit)])
            .send()
            .await?;

        Self::decode(&url, response).await
    }

    /// Fetch stories through the Hacker News proxy.
    pub async fn fetch_hacker_news(&self, limit: u32, story_type: &str) -> HubResult<Vec<HnStory>> {
        let url = format!("{}{}", self.base_url, HACKER_NEWS_PATH);
        let limit = limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.as_str()), ("story_type", story_type)])
            .send()
            .await?;

        Self::decode(&url, response).await
    }

    async fn decode<T: for<'de> Deserialize<'de>>(
        url: &str,
        response: reqwest::Response,
    ) -> HubResult<Vec<T>> {
        let status = response.status();
        if !status.is_success() {
            return Err(HubError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body)?;

        // The proxy reports upstream failures inside a 200 envelope
        if let Some(error) = envelope.error {
            if envelope.articles.is_empty() {
                return Err(HubError::Upstream(error));
            }
        }

        Ok(envelope.articles)
    }
}
