//! Dashboard view state.
//!
//! Each feed group owns its own `{status, articles}` pair; the aggregate
//! loading/error views are derived on demand instead of being shared
//! mutable flags, so one group's outcome can never clobber another's.

use crate::fetch::GroupOutcome;
use crate::filter::filter_articles;
use crate::model::{seed_articles, Article, Category, CategoryFilter};
use crate::sources::FeedGroup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug)]
pub struct SourceState {
    pub category: Category,
    pub status: FetchStatus,
    articles: Vec<Article>,
}

impl SourceState {
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }
}

/// The whole client-side state: seed items, one state per feed group in
/// registration order, the filter inputs, and the reader selection.
#[derive(Debug)]
pub struct Dashboard {
    seed: Vec<Article>,
    sources: Vec<SourceState>,
    category: CategoryFilter,
    search_term: String,
    reader: Option<String>,
}

impl Dashboard {
    pub fn new(groups: &[FeedGroup]) -> Self {
        Self {
            seed: seed_articles(),
            sources: groups
                .iter()
                .map(|group| SourceState {
                    category: group.category,
                    status: FetchStatus::Loading,
                    articles: Vec::new(),
                })
                .collect(),
            category: CategoryFilter::All,
            search_term: String::new(),
            reader: None,
        }
    }

    /// Fold fetch outcomes into the per-group states. Outcomes for groups
    /// this dashboard doesn't know are ignored.
    pub fn apply(&mut self, outcomes: Vec<GroupOutcome>) {
        for outcome in outcomes {
            self.apply_outcome(outcome);
        }
    }

    pub fn apply_outcome(&mut self, outcome: GroupOutcome) {
        let Some(source) = self
            .sources
            .iter_mut()
            .find(|s| s.category == outcome.category)
        else {
            return;
        };

        match outcome.result {
            Ok(articles) => {
                source.articles = articles;
                source.status = FetchStatus::Ready;
            }
            Err(e) => {
                source.articles.clear();
                source.status = FetchStatus::Failed(e.to_string());
            }
        }
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Open the reader on an article id. Returns false (and stays closed)
    /// when the id isn't in the merged list.
    pub fn open_reader(&mut self, id: &str) -> bool {
        if self.merged().any(|a| a.id == id) {
            self.reader = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn close_reader(&mut self) {
        self.reader = None;
    }

    pub fn reader_article(&self) -> Option<&Article> {
        let id = self.reader.as_deref()?;
        self.merged().find(|a| a.id == id)
    }

    /// The merged list after the filter engine: seed items first, then each
    /// group's articles in registration order.
    pub fn visible(&self) -> Vec<&Article> {
        filter_articles(self.merged(), self.category, &self.search_term)
    }

    /// True while any group is still in flight.
    pub fn is_loading(&self) -> bool {
        self.sources
            .iter()
            .any(|s| s.status == FetchStatus::Loading)
    }

    /// Every failed group's error, in registration order.
    pub fn errors(&self) -> Vec<(Category, &str)> {
        self.sources
            .iter()
            .filter_map(|s| match &s.status {
                FetchStatus::Failed(message) => Some((s.category, message.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn sources(&self) -> &[SourceState] {
        &self.sources
    }

    fn merged(&self) -> impl Iterator<Item = &Article> {
        self.seed
            .iter()
            .chain(self.sources.iter().flat_map(|s| s.articles.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubError;
    use crate::sources::default_groups;

    fn dashboard() -> Dashboard {
        Dashboard::new(&default_groups("topstories"))
    }

    fn article(id: &str, title: &str, category: Category) -> Article {
        Article::new(id, title, category)
            .with_excerpt("excerpt")
            .with_content("content")
    }

    fn ok_outcome(category: Category, articles: Vec<Article>) -> GroupOutcome {
        GroupOutcome {
            category,
            result: Ok(articles),
        }
    }

    fn failed_outcome(category: Category, message: &str) -> GroupOutcome {
        GroupOutcome {
            category,
            result: Err(HubError::Upstream(message.to_string())),
        }
    }

    #[test]
    fn test_new_dashboard_is_loading_with_seeds_visible() {
        let dash = dashboard();
        assert!(dash.is_loading());
        assert!(dash.errors().is_empty());
        // Seed items render before any fetch resolves
        assert_eq!(dash.visible().len(), 9);
    }

    #[test]
    fn test_apply_marks_groups_ready() {
        let mut dash = dashboard();
        dash.apply(vec![
            ok_outcome(Category::HackerNews, vec![article("100", "HN story", Category::HackerNews)]),
        ]);

        // Other groups still in flight
        assert!(dash.is_loading());

        dash.apply(vec![
            ok_outcome(Category::Llm, vec![]),
            ok_outcome(Category::ExperiencedDevs, vec![]),
            ok_outcome(Category::Automation, vec![]),
            ok_outcome(Category::Architecture, vec![]),
        ]);
        assert!(!dash.is_loading());
        assert_eq!(dash.visible().len(), 10);
    }

    #[test]
    fn test_failed_group_keeps_others_intact() {
        let mut dash = dashboard();
        dash.apply(vec![
            ok_outcome(Category::Llm, vec![article("a", "AI paper", Category::Llm)]),
            failed_outcome(Category::HackerNews, "HTTP error fetching feed"),
        ]);

        let errors = dash.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, Category::HackerNews);
        assert_eq!(errors[0].1, "Aggregator error: HTTP error fetching feed");

        // The llm group's article is still there
        assert!(dash.visible().iter().any(|a| a.id == "a"));
    }

    #[test]
    fn test_merge_order_seeds_then_registration_order() {
        let mut dash = dashboard();
        dash.apply(vec![
            ok_outcome(Category::Architecture, vec![article("arch-1", "arch", Category::Architecture)]),
            ok_outcome(Category::Llm, vec![article("llm-1", "llm", Category::Llm)]),
        ]);

        let visible = dash.visible();
        let pos = |id: &str| visible.iter().position(|a| a.id == id).unwrap();

        // Seeds first, then llm group (registered before architecture)
        assert!(pos("seed-1") < pos("llm-1"));
        assert!(pos("llm-1") < pos("arch-1"));
    }

    #[test]
    fn test_filter_inputs_narrow_visible() {
        let mut dash = dashboard();
        dash.set_category(CategoryFilter::Only(Category::Llm));
        assert_eq!(dash.visible().len(), 3);

        dash.set_search("gpt");
        assert_eq!(dash.visible().len(), 1);

        dash.set_search("no such phrase anywhere");
        assert!(dash.visible().is_empty());
    }

    #[test]
    fn test_reader_open_close() {
        let mut dash = dashboard();
        assert!(dash.reader_article().is_none());

        assert!(dash.open_reader("seed-4"));
        let open = dash.reader_article().unwrap();
        assert!(open.title.contains("Claude 4"));

        dash.close_reader();
        assert!(dash.reader_article().is_none());
    }

    #[test]
    fn test_reader_rejects_unknown_id() {
        let mut dash = dashboard();
        assert!(!dash.open_reader("not-an-article"));
        assert!(dash.reader_article().is_none());
    }

    #[test]
    fn test_refetch_replaces_group_articles() {
        let mut dash = dashboard();
        dash.apply(vec![ok_outcome(
            Category::Automation,
            vec![article("old", "old", Category::Automation)],
        )]);
        dash.apply(vec![ok_outcome(
            Category::Automation,
            vec![article("new", "new", Category::Automation)],
        )]);

        let visible = dash.visible();
        assert!(visible.iter().any(|a| a.id == "new"));
        assert!(!visible.iter().any(|a| a.id == "old"));
    }

    #[test]
    fn test_failed_refetch_clears_stale_articles() {
        let mut dash = dashboard();
        dash.apply(vec![ok_outcome(
            Category::Llm,
            vec![article("stale", "stale", Category::Llm)],
        )]);
        dash.apply(vec![failed_outcome(Category::Llm, "boom")]);

        assert!(!dash.visible().iter().any(|a| a.id == "stale"));
        assert_eq!(dash.errors().len(), 1);
    }

    #[test]
    fn test_unknown_group_outcome_ignored() {
        // A dashboard built over a subset of groups ignores outcomes for
        // categories it never registered
        let groups = default_groups("topstories");
        let llm_only: Vec<_> = groups
            .into_iter()
            .filter(|g| g.category == Category::Llm)
            .collect();
        let mut dash = Dashboard::new(&llm_only);

        dash.apply(vec![ok_outcome(
            Category::HackerNews,
            vec![article("hn", "hn", Category::HackerNews)],
        )]);
        assert!(!dash.visible().iter().any(|a| a.id == "hn"));
    }
}
