//! Page manifest loader - reads the host's page index from disk

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Page;

/// Errors raised while reading a page manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported manifest format: {0} (expected .json, .yml or .yaml)")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse JSON manifest {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML manifest {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load pages from a JSON or YAML manifest, keeping the order they were written in
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<Page>, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let content = fs::read_to_string(path)?;
    let pages: Vec<Page> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|source| ManifestError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        Some("yml") | Some("yaml") => {
            serde_yaml::from_str(&content).map_err(|source| ManifestError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => return Err(ManifestError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::debug!("Loaded {} pages from {:?}", pages.len(), path);
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_json_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(
            &path,
            r#"[
  {"url": "/b/", "data": {"title": "B", "tags": ["eleventy"]}},
  {"url": "/a/", "data": {"title": "A", "tags": "eleventy", "featured": 1}}
]"#,
        )
        .unwrap();

        let pages = load_manifest(&path).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].url, "/b/");
        assert_eq!(pages[1].url, "/a/");
        assert!(pages[1].data.featured);
    }

    #[test]
    fn test_load_yaml_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.yml");
        fs::write(
            &path,
            r#"
- url: /one/
  data:
    title: One
    tags: [eleventy, markdown]
- url: /two/
  data:
    title: Two
"#,
        )
        .unwrap();

        let pages = load_manifest(&path).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].has_tags(&["eleventy", "markdown"]));
        assert!(pages[1].data.tags.is_empty());
    }

    #[test]
    fn test_manifest_with_scalar_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(
            &path,
            r#"[
  {"url": "/a/", "data": {"title": null}},
  {"url": false, "data": {"title": 2024, "permalink": false}}
]"#,
        )
        .unwrap();

        let pages = load_manifest(&path).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].data.title, "");
        assert_eq!(pages[1].url, "false");
        assert_eq!(pages[1].data.title, "2024");
    }

    #[test]
    fn test_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.toml");
        fs::write(&path, "").unwrap();

        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, ManifestError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let err = load_manifest(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound(_)));
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pages.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_manifest(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Json { .. }));
    }
}
