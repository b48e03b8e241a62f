//! Views derived from the tag index: the featured filter, featured and
//! per-topic collections.

use super::TagIndex;
use crate::content::Page;

/// Keep pages whose `featured` flag is set. A missing collection is empty.
pub fn featured(collection: Option<&[Page]>) -> Vec<Page> {
    collection
        .unwrap_or_default()
        .iter()
        .filter(|page| page.data.featured)
        .cloned()
        .collect()
}

/// Reverse a collection into a new one
pub fn reversed(collection: &[Page]) -> Vec<Page> {
    collection.iter().rev().cloned().collect()
}

/// Featured pages carrying `base_tag`, index order reversed
pub fn featured_view(index: &dyn TagIndex, base_tag: &str) -> Vec<Page> {
    let tagged = index.pages_by_tags(&[base_tag]);
    let mut pages = featured(Some(tagged.as_slice()));
    pages.reverse();
    pages
}

/// Pages carrying both `base_tag` and `topic`, index order reversed
pub fn topic_view(index: &dyn TagIndex, base_tag: &str, topic: &str) -> Vec<Page> {
    let mut pages = index.pages_by_tags(&[base_tag, topic]);
    pages.reverse();
    pages
}
