//! Plugin registration - the site's filters, collections and shortcodes

mod registry;

pub use registry::{CollectionFn, FilterFn, Registry, ShortcodeFn};

use crate::collections::{featured, featured_view, topic_view};
use crate::config::{DirConfig, SiteConfig};
use crate::helpers::{render_related, render_related_escaped, RelatedArgs};

/// Register the site's filters, collections and shortcodes, and return the
/// directories the build reads from and writes to.
///
/// Registers:
/// - the `featured` filter,
/// - `{prefix}:featured`, pages tagged with the base tag and marked featured,
/// - `{prefix}:{topic}` for each configured topic,
/// - the `related` shortcode.
pub fn configure(registry: &mut Registry, config: &SiteConfig) -> DirConfig {
    registry.add_filter("featured", |collection| featured(Some(collection)));

    let base_tag = config.base_tag.clone();
    registry.add_collection(config.collection_name("featured"), move |index| {
        featured_view(index, &base_tag)
    });

    for topic in &config.topics {
        let base_tag = config.base_tag.clone();
        let topic_tag = topic.clone();
        registry.add_collection(config.collection_name(topic), move |index| {
            topic_view(index, &base_tag, &topic_tag)
        });
    }

    let related = config.related.clone();
    registry.add_shortcode("related", move |args| {
        let args = RelatedArgs {
            cls: related.class.clone(),
            ..Default::default()
        }
        .with_named(args);

        if related.escape_html {
            render_related_escaped(&args)
        } else {
            render_related(&args)
        }
    });

    tracing::debug!("Configured {:?}", registry);
    config.dir.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::PageIndex;
    use crate::content::Page;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn configured() -> (Registry, DirConfig) {
        let mut registry = Registry::new();
        let dir = configure(&mut registry, &SiteConfig::default());
        (registry, dir)
    }

    #[test]
    fn test_returns_directories() {
        let (_, dir) = configured();
        assert_eq!(dir.input, "src");
        assert_eq!(dir.output, "www");
    }

    #[test]
    fn test_registers_collections() {
        let (registry, _) = configured();
        assert_eq!(
            registry.collection_names(),
            vec![
                "eleventy:featured",
                "eleventy:data",
                "eleventy:filters",
                "eleventy:markdown",
                "eleventy:nunjucks",
                "eleventy:pagination",
            ]
        );
    }

    #[test]
    fn test_derived_collections() {
        let (registry, _) = configured();
        let index = PageIndex::new(vec![
            Page::new("/1/", "1").with_tags(["eleventy", "data"]).featured(),
            Page::new("/2/", "2").with_tags(["eleventy", "nunjucks"]),
            Page::new("/3/", "3").with_tags(["eleventy", "data", "nunjucks"]).featured(),
            Page::new("/4/", "4").with_tags(["data"]).featured(),
        ]);

        let set = registry.build_collections(&index);
        let urls = |name: &str| -> Vec<String> {
            set[name].iter().map(|p| p.url.clone()).collect()
        };

        assert_eq!(urls("eleventy:featured"), vec!["/3/", "/1/"]);
        assert_eq!(urls("eleventy:data"), vec!["/3/", "/1/"]);
        assert_eq!(urls("eleventy:nunjucks"), vec!["/3/", "/2/"]);
        assert!(urls("eleventy:pagination").is_empty());
    }

    #[test]
    fn test_featured_filter_registered() {
        let (registry, _) = configured();
        let pages = vec![Page::new("/a/", "A").featured(), Page::new("/b/", "B")];
        let result = registry.apply_filter("featured", Some(pages.as_slice())).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(registry.apply_filter("featured", None), Some(Vec::new()));
    }

    #[test]
    fn test_related_shortcode_registered() {
        let (registry, _) = configured();
        let mut args: HashMap<String, Value> = HashMap::new();
        args.insert(
            "collection".to_string(),
            json!([{"url": "/a/", "data": {"title": "A"}}, {"url": "/b/", "data": {"title": "B"}}]),
        );
        args.insert("filterUrl".to_string(), json!("/a/"));

        let html = registry.call_shortcode("related", &args).unwrap();
        assert_eq!(
            html,
            "<section class=\"related\">\n<ul><li><a href=\"/b/\">B</a></li></ul></section>"
        );
    }

    #[test]
    fn test_related_shortcode_uses_site_settings() {
        let mut config = SiteConfig::default();
        config.related.class = "aside".to_string();
        config.related.escape_html = true;
        let mut registry = Registry::new();
        configure(&mut registry, &config);

        let mut args: HashMap<String, Value> = HashMap::new();
        args.insert(
            "collection".to_string(),
            json!([{"url": "/a/", "data": {"title": "A & B"}}]),
        );

        let html = registry.call_shortcode("related", &args).unwrap();
        assert!(html.starts_with("<section class=\"aside\">"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn test_custom_prefix_and_topics() {
        let mut config = SiteConfig::default();
        config.collection_prefix = "site".to_string();
        config.topics = vec!["guides".to_string()];
        let mut registry = Registry::new();
        configure(&mut registry, &config);

        assert_eq!(
            registry.collection_names(),
            vec!["site:featured", "site:guides"]
        );
    }
}
