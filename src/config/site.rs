//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Tag every derived collection starts from
    pub base_tag: String,
    /// Prefix for registered collection names (`prefix:name`)
    pub collection_prefix: String,
    /// Topic tags that each get their own collection
    pub topics: Vec<String>,

    /// Page manifest, relative to the base directory
    pub manifest: String,

    // Directory
    pub dir: DirConfig,

    // Shortcodes
    pub related: RelatedConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_tag: "eleventy".to_string(),
            collection_prefix: "eleventy".to_string(),
            topics: ["data", "filters", "markdown", "nunjucks", "pagination"]
                .iter()
                .map(|t| t.to_string())
                .collect(),

            manifest: "pages.json".to_string(),

            dir: DirConfig::default(),

            related: RelatedConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Registered name of a derived collection
    pub fn collection_name(&self, name: &str) -> String {
        format!("{}:{}", self.collection_prefix, name)
    }
}

/// Source and destination directories handed back to the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirConfig {
    pub input: String,
    pub output: String,
}

impl Default for DirConfig {
    fn default() -> Self {
        Self {
            input: "src".to_string(),
            output: "www".to_string(),
        }
    }
}

/// Related-content shortcode configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedConfig {
    /// CSS class used when a template does not pass `cls`
    pub class: String,
    /// Escape titles and URLs in rendered fragments
    pub escape_html: bool,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            class: "related".to_string(),
            escape_html: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.base_tag, "eleventy");
        assert_eq!(config.topics.len(), 5);
        assert_eq!(config.dir.input, "src");
        assert_eq!(config.dir.output, "www");
        assert_eq!(config.related.class, "related");
        assert!(!config.related.escape_html);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
base_tag: docs
collection_prefix: site
topics:
  - guides
dir:
  output: public
related:
  escape_html: true
analytics: plausible
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_tag, "docs");
        assert_eq!(config.topics, vec!["guides"]);
        assert_eq!(config.dir.input, "src");
        assert_eq!(config.dir.output, "public");
        assert_eq!(config.related.class, "related");
        assert!(config.related.escape_html);
        assert!(config.extra.contains_key("analytics"));
    }

    #[test]
    fn test_collection_name() {
        let config = SiteConfig::default();
        assert_eq!(config.collection_name("featured"), "eleventy:featured");
    }
}
