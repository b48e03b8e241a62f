//! Collections - the host's tag index and the views derived from it

mod views;

pub use views::{featured, featured_view, reversed, topic_view};

use indexmap::IndexMap;

use crate::content::Page;

/// Named collections, in the order they were registered
pub type CollectionSet = IndexMap<String, Vec<Page>>;

/// Read-only access to the pages the host knows about
///
/// Implementations decide the order pages come back in; derived views only
/// ever reverse it.
pub trait TagIndex {
    /// Every page, in index order
    fn all(&self) -> &[Page];

    /// Pages carrying every one of `tags`, in index order
    fn pages_by_tags(&self, tags: &[&str]) -> Vec<Page> {
        self.all()
            .iter()
            .filter(|page| page.has_tags(tags))
            .cloned()
            .collect()
    }
}

/// In-memory tag index over a list of pages
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    pages: Vec<Page>,
}

impl PageIndex {
    /// Create an index, keeping `pages` in the order given
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Distinct tags with their page counts, most used first, ties by name
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for page in &self.pages {
            for tag in &page.data.tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }
}

impl From<Vec<Page>> for PageIndex {
    fn from(pages: Vec<Page>) -> Self {
        Self::new(pages)
    }
}

impl TagIndex for PageIndex {
    fn all(&self) -> &[Page] {
        &self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> PageIndex {
        PageIndex::new(vec![
            Page::new("/1/", "One").with_tags(["eleventy", "data"]),
            Page::new("/2/", "Two").with_tags(["data"]),
            Page::new("/3/", "Three").with_tags(["eleventy"]),
            Page::new("/4/", "Four").with_tags(["data", "eleventy", "markdown"]),
        ])
    }

    #[test]
    fn test_pages_by_single_tag() {
        let pages = index().pages_by_tags(&["eleventy"]);
        let urls: Vec<_> = pages.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["/1/", "/3/", "/4/"]);
    }

    #[test]
    fn test_pages_by_tags_requires_all() {
        let pages = index().pages_by_tags(&["eleventy", "data"]);
        let urls: Vec<_> = pages.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, vec!["/1/", "/4/"]);
    }

    #[test]
    fn test_pages_by_unknown_tag() {
        assert!(index().pages_by_tags(&["nunjucks"]).is_empty());
    }

    #[test]
    fn test_tag_counts_ties_ignore_page_order() {
        let index = PageIndex::new(vec![
            Page::new("/1/", "1").with_tags(["zeta"]),
            Page::new("/2/", "2").with_tags(["alpha"]),
        ]);
        let names: Vec<_> = index.tag_counts().into_iter().map(|(t, _)| t).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_tag_counts() {
        let counts = index().tag_counts();
        assert_eq!(counts[0], ("data".to_string(), 3));
        assert_eq!(counts[1], ("eleventy".to_string(), 3));
        assert_eq!(counts[2], ("markdown".to_string(), 1));
    }
}
