//! The storage capability shared by every backend.

use crate::error::StoreResult;
use crate::note::{Note, NoteChanges, NoteId};

/// Capability set the use-case layer needs from a note backend.
///
/// Implementations own the note collection and the id counter. Callers only
/// ever receive copies, so no mutable reference to stored data escapes.
pub trait Storage: Send + Sync {
    /// Every stored note, ordered by ascending id.
    fn read_all(&self) -> StoreResult<Vec<Note>>;

    /// The note stored under `id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) when nothing is
    /// stored under `id`.
    fn read(&self, id: NoteId) -> StoreResult<Note>;

    /// Store a new note under the next id. Ids are never reused.
    fn create(&self, name: String, content: String) -> StoreResult<Note>;

    /// Overwrite the fields set in `changes` and return the updated note.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) when nothing is
    /// stored under `id`. No entry is created in that case.
    fn update(&self, id: NoteId, changes: NoteChanges) -> StoreResult<Note>;

    /// Remove the note stored under `id` and return its last value.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`](crate::StoreError::NotFound) when nothing is
    /// stored under `id`.
    fn delete(&self, id: NoteId) -> StoreResult<Note>;

    /// Number of stored notes.
    fn len(&self) -> usize;

    /// Whether the store holds no notes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
