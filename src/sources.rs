//! Feed group definitions and per-source normalization.
//!
//! A feed group is one logical content source: either a set of RSS feeds
//! fetched through the proxy and merged (subreddit groups), or the Hacker
//! News proxy. Registration order here is merge order in the dashboard,
//! after the built-in seed items.

use crate::api::{HnStory, RssItem};
use crate::model::{Article, Category};
use crate::normalize::{excerpt_of, format_date_str, format_epoch, strip_html};

/// One RSS feed inside a group: the upstream feed URL plus the label shown
/// as the article's source.
#[derive(Debug, Clone)]
pub struct RssFeed {
    pub url: String,
    pub source: String,
}

impl RssFeed {
    fn subreddit(name: &str) -> Self {
        Self {
            url: format!("https://www.reddit.com/r/{}/.rss", name),
            source: format!("r/{}", name),
        }
    }
}

#[derive(Debug, Clone)]
pub enum GroupKind {
    /// One or more RSS feeds, fetched in parallel and merged in feed order.
    Rss { feeds: Vec<RssFeed> },
    /// The Hacker News proxy endpoint.
    HackerNews { story_type: String },
}

#[derive(Debug, Clone)]
pub struct FeedGroup {
    pub category: Category,
    pub kind: GroupKind,
}

impl FeedGroup {
    fn rss(category: Category, subreddits: &[&str]) -> Self {
        Self {
            category,
            kind: GroupKind::Rss {
                feeds: subreddits.iter().map(|s| RssFeed::subreddit(s)).collect(),
            },
        }
    }
}

/// The fixed set of feed groups, in merge order.
pub fn default_groups(hn_story_type: &str) -> Vec<FeedGroup> {
    vec![
        FeedGroup::rss(Category::Llm, &["artificial", "MachineLearning", "LocalLLaMA"]),
        FeedGroup {
            category: Category::HackerNews,
            kind: GroupKind::HackerNews {
                story_type: hn_story_type.to_string(),
            },
        },
        FeedGroup::rss(Category::ExperiencedDevs, &["ExperiencedDevs"]),
        FeedGroup::rss(Category::Automation, &["automation"]),
        FeedGroup::rss(Category::Architecture, &["softwarearchitecture", "devops", "aws"]),
    ]
}

/// Map a proxied RSS item into the normalized article shape.
pub fn normalize_rss_item(item: RssItem, category: Category, source: &str) -> Article {
    let title = item.title.unwrap_or_else(|| "Untitled".to_string());

    let body = item
        .description
        .or(item.summary)
        .or(item.content)
        .unwrap_or_default();

    // Identity comes from the feed itself when it provides one
    let id = item
        .guid
        .or_else(|| item.link.clone())
        .unwrap_or_else(|| title.clone());

    let date = item.published.as_deref().map(format_date_str).unwrap_or_default();

    Article::new(id, title, category)
        .with_date(date)
        .with_source(source)
        .with_excerpt(excerpt_of(&body))
        .with_content(strip_html(&body))
        .with_url(item.link)
        .with_by(item.author)
}

/// Map a Hacker News story into the normalized article shape. Stories have
/// no body, so the excerpt is synthesized from score and comment count.
pub fn normalize_hn_story(story: HnStory) -> Article {
    let summary = format!("{} points | {} comments", story.score, story.descendants);

    Article::new(story.id.to_string(), story.title, Category::HackerNews)
        .with_date(format_epoch(story.time))
        .with_source("Hacker News")
        .with_excerpt(summary.clone())
        .with_content(summary)
        .with_url(story.url)
        .with_by(story.by)
}
