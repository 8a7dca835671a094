use std::io;

use thiserror::Error;

/// Library-wide error type for pn-onboard operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Saved progress file could not be parsed.
    #[error("Could not parse saved progress: {0}")]
    ProgressParse(String),

    /// System clipboard was unavailable or rejected the write.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
