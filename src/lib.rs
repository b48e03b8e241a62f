//! tagshelf: tag-derived collections and related-content shortcodes
//!
//! This crate provides the site-level configuration of a static site: it
//! registers the `featured` filter, the featured and per-topic collections
//! and the `related` shortcode, and renders Tera templates with them.

pub mod collections;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod plugin;
pub mod templates;

use anyhow::{bail, Result};
use std::path::{Component, Path, PathBuf};

use collections::{CollectionSet, PageIndex, TagIndex};
use plugin::Registry;
use templates::TemplateRenderer;

/// A configured site
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Registered filters, collections and shortcodes
    pub registry: Registry,
    /// Base directory
    pub base_dir: PathBuf,
    /// Template (input) directory
    pub input_dir: PathBuf,
    /// Rendered (output) directory
    pub output_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    /// Create a site from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Result<Self> {
        let mut registry = Registry::new();
        let dir = plugin::configure(&mut registry, &config);

        let input_dir = base_dir.join(&dir.input);
        let output_dir = output_dir(&base_dir, &dir.output)?;

        Ok(Self {
            config,
            registry,
            base_dir,
            input_dir,
            output_dir,
        })
    }

    /// Path of the page manifest, `override_path` taking precedence
    pub fn manifest_path(&self, override_path: Option<&Path>) -> PathBuf {
        match override_path {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => self.base_dir.join(path),
            None => self.base_dir.join(&self.config.manifest),
        }
    }

    /// Load the page index from the manifest
    pub fn load_index(&self, override_path: Option<&Path>) -> Result<PageIndex> {
        let path = self.manifest_path(override_path);
        let pages = content::load_manifest(&path)?;
        tracing::info!("Loaded {} pages from {:?}", pages.len(), path);
        Ok(PageIndex::new(pages))
    }

    /// Derive every registered collection
    pub fn collections(&self, index: &dyn TagIndex) -> CollectionSet {
        self.registry.build_collections(index)
    }

    /// Template renderer with this site's filters and shortcodes
    pub fn renderer(&self) -> TemplateRenderer {
        TemplateRenderer::new(&self.registry)
    }

    /// Remove the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

/// Resolve the output directory. It is removed by `clean`, so it must never
/// be the base directory or one of its ancestors.
fn output_dir(base_dir: &Path, output: &str) -> Result<PathBuf> {
    let path = Path::new(output.trim());

    let unsafe_dir = if path.is_absolute() {
        base_dir.starts_with(path)
    } else {
        let mut normal = false;
        for component in path.components() {
            match component {
                Component::Normal(_) => normal = true,
                Component::CurDir => {}
                _ => bail!("Output directory {:?} must stay inside the site directory", output),
            }
        }
        !normal
    };

    if unsafe_dir {
        bail!(
            "Output directory {:?} would contain the site directory {:?}",
            output,
            base_dir
        );
    }

    Ok(base_dir.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir() {
        let base = Path::new("/srv/site");
        assert_eq!(output_dir(base, "www").unwrap(), base.join("www"));
        assert_eq!(output_dir(base, "./build/www").unwrap(), base.join("build/www"));
        assert_eq!(output_dir(base, "/var/www").unwrap(), PathBuf::from("/var/www"));
    }

    #[test]
    fn test_output_dir_rejects_site_and_ancestors() {
        let base = Path::new("/srv/site");
        for output in ["", " ", ".", "./", "..", "../public", "www/../..", "/srv", "/srv/site", "/"] {
            assert!(output_dir(base, output).is_err(), "output = {:?}", output);
        }
    }
}
