//! List site content

use anyhow::Result;
use std::path::Path;

use crate::collections::TagIndex;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, manifest: Option<&Path>, content_type: &str) -> Result<()> {
    match content_type {
        "page" | "pages" => {
            let index = site.load_index(manifest)?;
            println!("Pages ({}):", index.len());
            for page in index.all() {
                let date = page
                    .parsed_date()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "----------".to_string());
                println!("  {} - {} [{}]", date, page.data.title, page.url);
            }
        }
        "tag" | "tags" => {
            let index = site.load_index(manifest)?;
            let tags = index.tag_counts();
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "collection" | "collections" => {
            let names = site.registry.collection_names();
            println!("Collections ({}):", names.len());
            for name in names {
                println!("  {}", name);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: page, tag, collection",
                content_type
            );
        }
    }

    Ok(())
}
