use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from building or rendering the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown story '{0}'")]
    UnknownStory(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
