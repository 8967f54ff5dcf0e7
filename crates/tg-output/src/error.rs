//! Error types for tg-output.

use thiserror::Error;

/// Errors from saving or loading persisted runs.
///
/// A missing results directory is *not* an error — `load_latest` signals
/// absence with `Ok(None)`.  Malformed JSON in an existing file is.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
