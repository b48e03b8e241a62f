//! CLI commands

pub mod clean;
pub mod collections;
pub mod list;
pub mod related;
pub mod render;
