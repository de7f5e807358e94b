//! Static catalog for the slate button stories.

pub mod config;
pub mod error;
pub mod gallery;
pub mod paths;

pub use config::CatalogConfig;
pub use error::CatalogError;
pub use gallery::{BuildReport, build, render_story};
