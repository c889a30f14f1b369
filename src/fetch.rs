//! Fetch orchestration across feed groups.
//!
//! Groups are independent: each resolves to its own result and one group
//! failing never disturbs another. Inside a multi-feed group the requests
//! run concurrently and are awaited jointly, so a single failing feed fails
//! its whole group. Nothing here detaches tasks onto the runtime; dropping
//! the future returned by [`fetch_all`] cancels every request in flight.

use futures::future::{join_all, try_join_all};
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::{HubError, HubResult};
use crate::model::{Article, Category};
use crate::sources::{normalize_hn_story, normalize_rss_item, FeedGroup, GroupKind};

/// Per-feed item limits passed through to the proxy.
#[derive(Debug, Clone, Copy)]
pub struct FetchLimits {
    pub rss: u32,
    pub hacker_news: u32,
}

/// The outcome of one feed group's fetch.
#[derive(Debug)]
pub struct GroupOutcome {
    pub category: Category,
    pub result: HubResult<Vec<Article>>,
}

/// Fetch and normalize a single group.
pub async fn fetch_group(
    client: &ApiClient,
    group: &FeedGroup,
    limits: FetchLimits,
) -> HubResult<Vec<Article>> {
    match &group.kind {
        GroupKind::Rss { feeds } => {
            let requests = feeds.iter().map(|feed| async move {
                let items = client.fetch_rss(&feed.url, limits.rss).await?;
                Ok::<_, HubError>((feed, items))
            });

            // Awaited jointly: the first failure fails the whole group
            let batches = try_join_all(requests).await?;

            let mut articles = Vec::new();
            for (feed, items) in batches {
                articles.extend(
                    items
                        .into_iter()
                        .map(|item| normalize_rss_item(item, group.category, &feed.source)),
                );
            }
            Ok(articles)
        }
        GroupKind::HackerNews { story_type } => {
            let stories = client
                .fetch_hacker_news(limits.hacker_news, story_type)
                .await?;
            Ok(stories.into_iter().map(normalize_hn_story).collect())
        }
    }
}

/// Fetch every group concurrently, returning one outcome per group in
/// registration order.
pub async fn fetch_all(
    client: &ApiClient,
    groups: &[FeedGroup],
    limits: FetchLimits,
) -> Vec<GroupOutcome> {
    let tasks = groups.iter().map(|group| async move {
        let result = fetch_group(client, group, limits).await;
        match &result {
            Ok(articles) => {
                info!("Fetched {} articles for group '{}'", articles.len(), group.category)
            }
            Err(e) => warn!("Group '{}' failed: {}", group.category, e),
        }
        GroupOutcome {
            category: group.category,
            result,
        }
    });

    join_all(tasks).await
}
