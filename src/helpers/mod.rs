//! Helper functions for templates
//!
//! These functions back the shortcodes registered with the template engine.

mod html;
mod related;

pub use html::*;
pub use related::*;
