//! Catalog build configuration.

use std::path::PathBuf;

/// Where and what to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Output directory for `index.html` and `meta.json`.
    pub out_dir: PathBuf,

    /// Page title of the gallery.
    pub title: String,

    /// Stories to include, by name or id. Empty means every story.
    pub stories: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("catalog"),
            title: slate::catalog::TITLE.to_string(),
            stories: Vec::new(),
        }
    }
}

impl CatalogConfig {
    /// Create a config writing to `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Restrict the build to one more story.
    pub fn story(mut self, name: impl Into<String>) -> Self {
        self.stories.push(name.into());
        self
    }

    pub fn stories(mut self, names: impl IntoIterator<Item = String>) -> Self {
        self.stories.extend(names);
        self
    }
}
