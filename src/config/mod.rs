//! Configuration module

mod site;

pub use site::DirConfig;
pub use site::RelatedConfig;
pub use site::SiteConfig;
