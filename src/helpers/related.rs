//! Related-content shortcode: a link list of the other pages in a collection

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;

use super::html::html_escape;
use crate::content::Page;

/// Default CSS class for the wrapping section
pub const DEFAULT_RELATED_CLASS: &str = "related";

/// Named arguments accepted by the `related` shortcode
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedArgs {
    /// Pages to list (`collection`)
    pub collection: Vec<Page>,
    /// Heading text (`title`)
    pub title: String,
    /// URL of the page being rendered, left out of the list (`filterUrl`)
    pub filter_url: String,
    /// CSS class of the wrapping section (`cls`)
    pub cls: String,
}

impl Default for RelatedArgs {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            title: String::new(),
            filter_url: String::new(),
            cls: DEFAULT_RELATED_CLASS.to_string(),
        }
    }
}

impl RelatedArgs {
    /// Build arguments from template keyword arguments
    pub fn from_named(args: &HashMap<String, Value>) -> Self {
        Self::default().with_named(args)
    }

    /// Override fields with whatever keyword arguments were passed.
    /// Absent, `null` or unusable values keep the current field.
    pub fn with_named(mut self, args: &HashMap<String, Value>) -> Self {
        if let Some(value) = args.get("collection") {
            self.collection = pages_from_value(value);
        }
        if let Some(title) = args.get("title").and_then(value_to_string) {
            self.title = title;
        }
        if let Some(url) = args.get("filterUrl").and_then(value_to_string) {
            self.filter_url = url;
        }
        if let Some(cls) = args.get("cls").and_then(value_to_string) {
            self.cls = cls;
        }
        self
    }
}

/// Read a list of pages from a template value. Anything that is not an
/// array is an empty list, and entries that are not pages are skipped.
pub fn pages_from_value(value: &Value) -> Vec<Page> {
    let Value::Array(items) = value else {
        if !value.is_null() {
            tracing::debug!("Expected a collection, got {}", value);
        }
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<Page>(item.clone()) {
            Ok(page) => Some(page),
            Err(e) => {
                tracing::debug!("Skipping collection entry that is not a page: {}", e);
                None
            }
        })
        .collect()
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Render the related-content fragment.
///
/// Titles and URLs are inserted verbatim; callers must pass trusted content
/// or use [`render_related_escaped`].
pub fn render_related(args: &RelatedArgs) -> String {
    render(args, false)
}

/// Same as [`render_related`] with every inserted value HTML-escaped
pub fn render_related_escaped(args: &RelatedArgs) -> String {
    render(args, true)
}

fn render(args: &RelatedArgs, escape: bool) -> String {
    let text = |s: &str| -> String {
        if escape {
            html_escape(s)
        } else {
            s.to_string()
        }
    };

    let pages: Vec<&Page> = args
        .collection
        .iter()
        .filter(|page| page.url != args.filter_url)
        .collect();

    if pages.is_empty() {
        return format!(
            r#"<!-- No related content found for "{}" -->"#,
            text(&args.title)
        );
    }

    let items = pages
        .iter()
        .map(|page| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                text(&page.url),
                text(&page.data.title)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let heading: Cow<str> = if args.title.is_empty() {
        Cow::Borrowed("")
    } else {
        Cow::Owned(format!("<h2>{}</h2>", text(&args.title)))
    };

    format!(
        r#"<section class="{}">{}
<ul>{}</ul></section>"#,
        text(&args.cls),
        heading,
        items.trim()
    )
}
