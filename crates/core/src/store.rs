//! Repository failure vocabulary.
//!
//! Domain crates declare their repository traits (customer lookup, product
//! catalog, order store) against this error type so that any backend, in-memory
//! or SQL, can report failures without leaking its own error types upward.

use thiserror::Error;

/// Result type returned by repository traits.
pub type StoreResult<T> = Result<T, StoreError>;

/// Infrastructure failure reported by a repository.
///
/// These are **not** business outcomes: a missing customer is `Ok(None)`, not
/// an error. A `StoreError` means the repository could not answer at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Backend unreachable, lock poisoned, connection dropped.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A write was rejected because it conflicts with stored state.
    #[error("store conflict: {0}")]
    Conflict(String),

    /// Stored data could not be decoded into a domain value.
    #[error("stored data corrupted: {0}")]
    Corrupted(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::Corrupted(msg.into())
    }
}
