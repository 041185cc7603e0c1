//! Errors for mode, theme and output-format selection.
//!
//! Scanning itself never fails; only looking up something by name can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HighlightError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HighlightError {
    #[error("unknown mode '{name}'")]
    UnknownMode { name: String },

    #[error("no mode registered for MIME type '{mime}'")]
    UnknownMime { mime: String },

    #[error("unknown theme '{name}' (expected base16-light or base16-dark)")]
    UnknownTheme { name: String },

    #[error("unknown output format '{name}' (expected html or ansi)")]
    UnknownFormat { name: String },
}
