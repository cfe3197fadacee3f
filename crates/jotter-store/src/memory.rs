//! In-process note storage.
//!
//! Notes live in a [`DashMap`] for the lifetime of the [`InMemoryStorage`]
//! value; nothing is persisted.  The map gives per-entry locking, so
//! concurrent HTTP handlers can read and write through cloned handles, and
//! the id counter is an [`AtomicU64`] so two concurrent creates can never be
//! handed the same id.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::note::{Note, NoteChanges, NoteId};
use crate::storage::Storage;

#[derive(Debug, Default)]
struct Inner {
    notes: DashMap<NoteId, Note>,
    /// Last id handed out; `0` means none yet.
    last_id: AtomicU64,
}

/// Concurrent in-memory note store.
///
/// Cheaply cloneable (`Arc`-backed); every clone is a handle to the same
/// collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    inner: Arc<Inner>,
}

impl InMemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `(name, content)` pairs.
    ///
    /// Seeded notes receive ids `1..=n` in iteration order.
    pub fn with_notes<I, N, C>(seed: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let inner = Inner::default();
        let mut last_id = 0;
        for (name, content) in seed {
            last_id += 1;
            inner.notes.insert(last_id, Note::new(last_id, name, content));
        }
        inner.last_id.store(last_id, Ordering::SeqCst);

        debug!(count = last_id, "storage seeded");
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Drop every stored note.
    ///
    /// The id counter keeps its value, so ids handed out after a clear never
    /// collide with ids handed out before it.
    pub fn clear(&self) {
        debug!(entries = self.inner.notes.len(), "storage cleared");
        self.inner.notes.clear();
    }

    fn next_id(&self) -> StoreResult<NoteId> {
        self.inner
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                last.checked_add(1)
            })
            .map(|last| last + 1)
            .map_err(|_| StoreError::IdSpaceExhausted)
    }
}

impl Storage for InMemoryStorage {
    fn read_all(&self) -> StoreResult<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .inner
            .notes
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        notes.sort_by_key(|note| note.id);
        Ok(notes)
    }

    fn read(&self, id: NoteId) -> StoreResult<Note> {
        self.inner
            .notes
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound { id })
    }

    fn create(&self, name: String, content: String) -> StoreResult<Note> {
        let id = self.next_id()?;
        let note = Note::new(id, name, content);
        self.inner.notes.insert(id, note.clone());

        debug!(note_id = id, "note created");
        Ok(note)
    }

    fn update(&self, id: NoteId, changes: NoteChanges) -> StoreResult<Note> {
        let mut entry = self
            .inner
            .notes
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        entry.apply(changes);

        debug!(note_id = id, "note updated");
        Ok(entry.value().clone())
    }

    fn delete(&self, id: NoteId) -> StoreResult<Note> {
        let (_, note) = self
            .inner
            .notes
            .remove(&id)
            .ok_or(StoreError::NotFound { id })?;

        debug!(note_id = id, "note deleted");
        Ok(note)
    }

    fn len(&self) -> usize {
        self.inner.notes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(store: &InMemoryStorage, name: &str, content: &str) -> Note {
        store
            .create(name.to_owned(), content.to_owned())
            .expect("create should succeed")
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let store = InMemoryStorage::new();
        let first = create(&store, "A", "B");
        let second = create(&store, "C", "D");

        assert_eq!(first, Note::new(1, "A", "B"));
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = InMemoryStorage::new();
        create(&store, "a", "1");
        let second = create(&store, "b", "2");
        store.delete(second.id).unwrap();

        let third = create(&store, "c", "3");
        assert_eq!(third.id, 3);
    }

    #[test]
    fn update_with_only_content_keeps_name() {
        let store = InMemoryStorage::new();
        let note = create(&store, "A", "B");

        let updated = store
            .update(note.id, NoteChanges::from_fields("", "C"))
            .unwrap();
        assert_eq!(updated, Note::new(note.id, "A", "C"));
        assert_eq!(store.read(note.id).unwrap(), updated);
    }

    #[test]
    fn update_without_changes_is_a_no_op() {
        let store = InMemoryStorage::new();
        let note = create(&store, "A", "B");

        let updated = store.update(note.id, NoteChanges::default()).unwrap();
        assert_eq!(updated, note);
    }

    #[test]
    fn update_of_missing_id_does_not_create_an_entry() {
        let store = InMemoryStorage::new();
        let err = store
            .update(42, NoteChanges::from_fields("x", "y"))
            .unwrap_err();

        assert_eq!(err, StoreError::NotFound { id: 42 });
        assert!(store.is_empty());
    }

    #[test]
    fn delete_returns_last_value_and_removes_it() {
        let store = InMemoryStorage::new();
        let note = create(&store, "A", "B");

        assert_eq!(store.delete(note.id).unwrap(), note);
        assert_eq!(
            store.read(note.id).unwrap_err(),
            StoreError::NotFound { id: note.id }
        );
        assert_eq!(
            store.delete(note.id).unwrap_err(),
            StoreError::NotFound { id: note.id }
        );
    }

    #[test]
    fn read_all_is_sorted_by_id() {
        let store = InMemoryStorage::new();
        for i in 0..20 {
            create(&store, &format!("n{i}"), "c");
        }
        let ids: Vec<NoteId> = store.read_all().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn clones_share_the_same_collection() {
        let store = InMemoryStorage::new();
        let handle = store.clone();
        create(&handle, "A", "B");

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn seeded_store_continues_numbering() {
        let store = InMemoryStorage::with_notes([("a", "1"), ("b", "2")]);
        assert_eq!(store.read(2).unwrap(), Note::new(2, "b", "2"));

        assert_eq!(create(&store, "c", "3").id, 3);
    }

    #[test]
    fn clear_keeps_the_id_counter() {
        let store = InMemoryStorage::with_notes([("a", "1"), ("b", "2")]);
        store.clear();
        assert!(store.is_empty());

        assert_eq!(create(&store, "c", "3").id, 3);
    }

    #[test]
    fn exhausted_counter_is_reported() {
        let store = InMemoryStorage::new();
        store.inner.last_id.store(u64::MAX, Ordering::SeqCst);

        assert_eq!(
            store.create("a".into(), "b".into()).unwrap_err(),
            StoreError::IdSpaceExhausted
        );
    }
}
