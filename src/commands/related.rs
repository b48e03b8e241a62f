//! Render the related-content fragment for one collection

use anyhow::{anyhow, bail, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::Site;

/// Options for the `related` command
#[derive(Debug, Clone, Default)]
pub struct RelatedOptions<'a> {
    pub manifest: Option<&'a Path>,
    pub collection: &'a str,
    pub title: Option<&'a str>,
    pub filter_url: Option<&'a str>,
    pub cls: Option<&'a str>,
}

/// Render the fragment through the registered `related` shortcode
pub fn render(site: &Site, options: &RelatedOptions<'_>) -> Result<String> {
    let index = site.load_index(options.manifest)?;

    let Some(pages) = site.registry.derive_collection(options.collection, &index) else {
        bail!(
            "Unknown collection: {}. Available: {}",
            options.collection,
            site.registry.collection_names().join(", ")
        );
    };

    let mut args: HashMap<String, Value> = HashMap::new();
    args.insert("collection".to_string(), serde_json::to_value(&pages)?);
    if let Some(title) = options.title {
        args.insert("title".to_string(), Value::from(title));
    }
    if let Some(url) = options.filter_url {
        args.insert("filterUrl".to_string(), Value::from(url));
    }
    if let Some(cls) = options.cls {
        args.insert("cls".to_string(), Value::from(cls));
    }

    site.registry
        .call_shortcode("related", &args)
        .ok_or_else(|| anyhow!("The related shortcode is not registered"))
}

/// Print the fragment
pub fn run(site: &Site, options: &RelatedOptions<'_>) -> Result<()> {
    println!("{}", render(site, options)?);
    Ok(())
}
