//! Tera integration - exposes registered filters and shortcodes to templates
//!
//! Filters receive the piped value as a collection (anything that is not a
//! list of pages becomes an empty one). Shortcodes are Tera functions called
//! with keyword arguments:
//!
//! ```text
//! {{ related(title="More on data", collection=collections["eleventy:data"], filterUrl=page.url) }}
//! ```

use anyhow::{Context as _, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tera::{Context, Tera, Value};

use crate::collections::CollectionSet;
use crate::content::Page;
use crate::helpers::pages_from_value;
use crate::plugin::Registry;

/// Template renderer with the site's filters and shortcodes installed
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a renderer with everything in `registry` registered
    pub fn new(registry: &Registry) -> Self {
        let mut tera = Tera::default();

        // Shortcodes return markup, so output is never escaped
        tera.autoescape_on(vec![]);

        for (name, filter) in registry.filters() {
            let filter = Arc::clone(filter);
            let filter_name = name.to_string();
            tera.register_filter(
                name,
                move |value: &Value, _args: &HashMap<String, Value>| -> tera::Result<Value> {
                    let pages = pages_from_value(value);
                    tera::to_value(filter(&pages)).map_err(|e| {
                        tera::Error::msg(format!("Filter `{}` failed: {}", filter_name, e))
                    })
                },
            );
        }

        for (name, shortcode) in registry.shortcodes() {
            let shortcode = Arc::clone(shortcode);
            tera.register_function(
                name,
                move |args: &HashMap<String, Value>| -> tera::Result<Value> {
                    Ok(Value::String(shortcode(args)))
                },
            );
        }

        Self { tera }
    }

    /// Add a template from a string
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.tera
            .add_raw_template(name, source)
            .with_context(|| format!("Failed to parse template {}", name))?;
        Ok(())
    }

    /// Add a template from a file, named after its path
    pub fn add_template_file<P: AsRef<Path>>(&mut self, path: P, name: &str) -> Result<()> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template {:?}", path))?;
        self.add_template(name, &source)?;
        tracing::debug!("Loaded template {} from {:?}", name, path);
        Ok(())
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render a one-off template string
    pub fn render_str(&mut self, source: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render_str(source, context)?)
    }
}

/// Build the context a page is rendered with: `page` and `collections`.
/// Without a page, `page` is an empty page so `page.url` is `""`.
pub fn page_context(page: Option<&Page>, collections: &CollectionSet) -> Context {
    let mut context = Context::new();
    match page {
        Some(page) => context.insert("page", page),
        None => context.insert("page", &Page::default()),
    }
    context.insert("collections", collections);
    context
}
