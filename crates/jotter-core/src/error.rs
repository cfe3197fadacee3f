//! Use-case error types.
//!
//! Every command surfaces failures through [`CoreError`].  A missing note is
//! its own variant so front-ends can tell "not found" apart from a note that
//! merely has empty fields.

use jotter_store::{NoteId, StoreError};

/// Unified error type for the use-case layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The referenced note does not exist.
    #[error("note not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: NoteId,
    },

    /// The storage backend failed for a reason other than a missing note.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => Self::NotFound { id },
            other => Self::Store(other),
        }
    }
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
