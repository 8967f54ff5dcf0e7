//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.  Prefer whichever
//! keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `tg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The parameter validator rejected a configuration.  `reasons` holds one
    /// entry per violated rule; construction must not proceed.
    #[error("invalid simulation parameters: {}", .reasons.join("; "))]
    InvalidParams { reasons: Vec<String> },
}

/// Shorthand result type for all `tg-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
