//! Clean the output directory

use anyhow::{bail, Result};
use std::fs;

use crate::Site;

/// Remove everything rendered into the output directory
pub fn run(site: &Site) -> Result<()> {
    if site.base_dir.starts_with(&site.output_dir) {
        bail!(
            "Refusing to delete {:?}: it contains the site directory",
            site.output_dir
        );
    }

    if site.output_dir.exists() {
        fs::remove_dir_all(&site.output_dir)?;
        tracing::info!("Deleted: {:?}", site.output_dir);
    }

    Ok(())
}
