//! Content module - the page model and the manifest it is read from

pub mod manifest;
mod page;

pub use manifest::{load_manifest, ManifestError};
pub use page::{Page, PageData};
