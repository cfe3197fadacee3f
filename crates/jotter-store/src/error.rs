//! Error types for the jotter-store crate.
//!
//! All storage operations return [`StoreError`] via [`StoreResult`].

use thiserror::Error;

use crate::note::NoteId;

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in a storage backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No note is stored under the requested id.
    #[error("note not found: {id}")]
    NotFound { id: NoteId },

    /// The id counter has no values left to hand out.
    #[error("note id space exhausted")]
    IdSpaceExhausted,
}
