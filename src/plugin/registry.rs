//! Plugin registry - filters, collections and shortcodes by name

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::collections::{CollectionSet, TagIndex};
use crate::content::Page;

/// Transforms a collection into a new one
pub type FilterFn = Arc<dyn Fn(&[Page]) -> Vec<Page> + Send + Sync>;

/// Derives a collection from the tag index
pub type CollectionFn = Arc<dyn Fn(&dyn TagIndex) -> Vec<Page> + Send + Sync>;

/// Renders markup from keyword arguments
pub type ShortcodeFn = Arc<dyn Fn(&HashMap<String, Value>) -> String + Send + Sync>;

/// Everything registered for a site, keyed by unique name
#[derive(Clone, Default)]
pub struct Registry {
    filters: IndexMap<String, FilterFn>,
    collections: IndexMap<String, CollectionFn>,
    shortcodes: IndexMap<String, ShortcodeFn>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection filter
    pub fn add_filter<F>(&mut self, name: impl Into<String>, filter: F)
    where
        F: Fn(&[Page]) -> Vec<Page> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.filters.insert(name.clone(), Arc::new(filter)).is_some() {
            tracing::warn!("Filter {} registered twice, keeping the latest", name);
        }
    }

    /// Register a derived collection
    pub fn add_collection<F>(&mut self, name: impl Into<String>, derive: F)
    where
        F: Fn(&dyn TagIndex) -> Vec<Page> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.collections.insert(name.clone(), Arc::new(derive)).is_some() {
            tracing::warn!("Collection {} registered twice, keeping the latest", name);
        }
    }

    /// Register a template shortcode
    pub fn add_shortcode<F>(&mut self, name: impl Into<String>, shortcode: F)
    where
        F: Fn(&HashMap<String, Value>) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        if self.shortcodes.insert(name.clone(), Arc::new(shortcode)).is_some() {
            tracing::warn!("Shortcode {} registered twice, keeping the latest", name);
        }
    }

    pub fn filters(&self) -> impl Iterator<Item = (&str, &FilterFn)> {
        self.filters.iter().map(|(name, f)| (name.as_str(), f))
    }

    pub fn shortcodes(&self) -> impl Iterator<Item = (&str, &ShortcodeFn)> {
        self.shortcodes.iter().map(|(name, f)| (name.as_str(), f))
    }

    /// Names of the registered collections, in registration order
    pub fn collection_names(&self) -> Vec<&str> {
        self.collections.keys().map(String::as_str).collect()
    }

    /// Run a filter by name; a missing collection is treated as empty.
    /// Returns `None` when no filter has that name.
    pub fn apply_filter(&self, name: &str, collection: Option<&[Page]>) -> Option<Vec<Page>> {
        let filter = self.filters.get(name)?;
        Some(filter(collection.unwrap_or_default()))
    }

    /// Derive one collection by name
    pub fn derive_collection(&self, name: &str, index: &dyn TagIndex) -> Option<Vec<Page>> {
        let derive = self.collections.get(name)?;
        Some(derive(index))
    }

    /// Call a shortcode by name
    pub fn call_shortcode(&self, name: &str, args: &HashMap<String, Value>) -> Option<String> {
        let shortcode = self.shortcodes.get(name)?;
        Some(shortcode(args))
    }

    /// Derive every registered collection
    pub fn build_collections(&self, index: &dyn TagIndex) -> CollectionSet {
        self.collections
            .iter()
            .map(|(name, derive)| {
                let pages = derive(index);
                tracing::debug!("Collection {} has {} pages", name, pages.len());
                (name.clone(), pages)
            })
            .collect()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("collections", &self.collections.keys().collect::<Vec<_>>())
            .field("shortcodes", &self.shortcodes.keys().collect::<Vec<_>>())
            .finish()
    }
}
