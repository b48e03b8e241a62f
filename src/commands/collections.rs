//! Print the derived collections

use anyhow::Result;
use std::path::Path;

use crate::Site;

/// Derive every collection and print it
pub fn run(site: &Site, manifest: Option<&Path>, json: bool) -> Result<()> {
    let index = site.load_index(manifest)?;
    let collections = site.collections(&index);

    if json {
        println!("{}", serde_json::to_string_pretty(&collections)?);
        return Ok(());
    }

    for (name, pages) in &collections {
        println!("{} ({}):", name, pages.len());
        for page in pages {
            println!("  {} [{}]", page.data.title, page.url);
        }
    }

    Ok(())
}
