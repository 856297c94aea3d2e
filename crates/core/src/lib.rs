//! Shared primitives for all Rosterly crates.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Rosterly crates.
pub type AppResult<T> = Result<T, AppError>;

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("{0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
