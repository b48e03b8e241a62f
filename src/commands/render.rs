//! Render a template from the input directory

use anyhow::{bail, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::collections::TagIndex;
use crate::templates::page_context;
use crate::Site;

/// Render `template` (relative to the input directory) for the page at `url`
pub fn render(
    site: &Site,
    manifest: Option<&Path>,
    template: &str,
    url: Option<&str>,
) -> Result<String> {
    let escapes = Path::new(template)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        bail!(
            "Template {} must be a relative path inside the input directory",
            template
        );
    }

    let template_path = site.input_dir.join(template);
    if !template_path.is_file() {
        bail!("Template not found: {:?}", template_path);
    }

    let index = site.load_index(manifest)?;
    let collections = site.collections(&index);

    let page = match url {
        Some(url) => {
            let page = index.all().iter().find(|p| p.url == url);
            if page.is_none() {
                tracing::warn!("No page with url {} in the manifest", url);
            }
            page
        }
        None => None,
    };

    let mut renderer = site.renderer();
    renderer.add_template_file(&template_path, template)?;
    renderer.render(template, &page_context(page, &collections))
}

/// Render and either print the result or write it under the output directory
pub fn run(
    site: &Site,
    manifest: Option<&Path>,
    template: &str,
    url: Option<&str>,
    write: bool,
) -> Result<Option<PathBuf>> {
    let html = render(site, manifest, template, url)?;

    if !write {
        println!("{}", html);
        return Ok(None);
    }

    let out_path = site.output_dir.join(template);
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, html)?;
    tracing::info!("Wrote {:?}", out_path);

    Ok(Some(out_path))
}
