//! The filter engine: category selection and free-text search combined
//! into one predicate over the merged article list. Purely functional; the
//! dashboard state owns the inputs.

use crate::model::{Article, CategoryFilter};

/// Keep an article iff it matches the selected category and the search
/// term appears case-insensitively in its title or excerpt. An empty
/// search term matches everything. Order is preserved: no ranking.
pub fn filter_articles<'a, I>(
    articles: I,
    category: CategoryFilter,
    search_term: &str,
) -> Vec<&'a Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    let needle = search_term.to_lowercase();

    articles
        .into_iter()
        .filter(|article| category.matches(article.category))
        .filter(|article| matches_search(article, &needle))
        .collect()
}

fn matches_search(article: &Article, lowercase_needle: &str) -> bool {
    if lowercase_needle.is_empty() {
        return true;
    }

    article.title.to_lowercase().contains(lowercase_needle)
        || article.excerpt.to_lowercase().contains(lowercase_needle)
}
