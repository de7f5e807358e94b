//! Error types

use thiserror::Error;

/// Failure to parse a variant or size name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown button variant '{0}' (expected default, destructive, outline, secondary, ghost or link)")]
    UnknownVariant(String),

    #[error("unknown button size '{0}' (expected default, sm, lg, icon, icon-sm or icon-lg)")]
    UnknownSize(String),
}
