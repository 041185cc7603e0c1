//! CLI error type.

use std::io;

use icu_highlight::HighlightError;
use thiserror::Error;

/// Anything that stops a command.
///
/// Printed to stderr as `error: <message>`; see [`CliError::exit_code`].
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Usage { message: String },

    #[error("cannot find file '{path}'")]
    FileNotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Highlight(#[from] HighlightError),

    #[error("cannot serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Classify a failed read of `path`.
    pub fn read(path: &str, err: io::Error) -> Self {
        let path = path.to_owned();
        match err.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::InvalidData => Self::InvalidUtf8 { path },
            _ => Self::Read { path, source: err },
        }
    }

    /// Process exit status: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 2,
            _ => 1,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage { .. })
    }
}
