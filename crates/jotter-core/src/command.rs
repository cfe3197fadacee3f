//! The five note use-cases.
//!
//! Each command holds a handle to the storage capability and calls exactly one
//! of its operations.  None of them knows which backend sits behind the
//! handle or which front-end built the message.

use std::sync::Arc;

use jotter_store::Storage;
use tracing::instrument;

use crate::error::Result;
use crate::message::{
    CreateMessage, CreateResult, DeleteMessage, DeleteResult, ReadAllMessage, ReadAllResult,
    ReadMessage, ReadResult, UpdateMessage, UpdateResult,
};

/// A single use-case: message in, result out.
pub trait Command {
    type Message;
    type Output;

    /// Run the use-case against its storage handle.
    fn execute(&self, message: Self::Message) -> Result<Self::Output>;
}

/// Lists every note.
#[derive(Clone)]
pub struct ReadAllCommand {
    storage: Arc<dyn Storage>,
}

impl ReadAllCommand {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

impl Command for ReadAllCommand {
    type Message = ReadAllMessage;
    type Output = ReadAllResult;

    #[instrument(level = "debug", skip(self))]
    fn execute(&self, _message: ReadAllMessage) -> Result<ReadAllResult> {
        let notes = self.storage.read_all()?;
        Ok(ReadAllResult { notes })
    }
}

/// Fetches one note by id.
#[derive(Clone)]
pub struct ReadCommand {
    storage: Arc<dyn Storage>,
}

impl ReadCommand {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

impl Command for ReadCommand {
    type Message = ReadMessage;
    type Output = ReadResult;

    #[instrument(level = "debug", skip(self))]
    fn execute(&self, message: ReadMessage) -> Result<ReadResult> {
        let note = self.storage.read(message.id)?;
        Ok(ReadResult { note })
    }
}

/// Stores a new note.
#[derive(Clone)]
pub struct CreateCommand {
    storage: Arc<dyn Storage>,
}

impl CreateCommand {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

impl Command for CreateCommand {
    type Message = CreateMessage;
    type Output = CreateResult;

    #[instrument(level = "debug", skip(self))]
    fn execute(&self, message: CreateMessage) -> Result<CreateResult> {
        let note = self.storage.create(message.name, message.content)?;
        Ok(CreateResult { note })
    }
}

/// Applies a partial update to one note.
#[derive(Clone)]
pub struct UpdateCommand {
    storage: Arc<dyn Storage>,
}

impl UpdateCommand {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

impl Command for UpdateCommand {
    type Message = UpdateMessage;
    type Output = UpdateResult;

    #[instrument(level = "debug", skip(self))]
    fn execute(&self, message: UpdateMessage) -> Result<UpdateResult> {
        let note = self.storage.update(message.id, message.changes)?;
        Ok(UpdateResult { note })
    }
}

/// Removes one note and hands back its last value.
#[derive(Clone)]
pub struct DeleteCommand {
    storage: Arc<dyn Storage>,
}

impl DeleteCommand {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

impl Command for DeleteCommand {
    type Message = DeleteMessage;
    type Output = DeleteResult;

    #[instrument(level = "debug", skip(self))]
    fn execute(&self, message: DeleteMessage) -> Result<DeleteResult> {
        let note = self.storage.delete(message.id)?;
        Ok(DeleteResult { note })
    }
}

#[cfg(test)]
mod tests {
    use jotter_store::{InMemoryStorage, Note, NoteChanges};

    use super::*;
    use crate::error::CoreError;

    fn storage() -> Arc<dyn Storage> {
        Arc::new(InMemoryStorage::with_notes([("A", "B")]))
    }

    #[test]
    fn read_wraps_the_stored_note() {
        let result = ReadCommand::new(storage())
            .execute(ReadMessage { id: 1 })
            .unwrap();
        assert_eq!(result.note, Note::new(1, "A", "B"));
    }

    #[test]
    fn read_of_missing_note_is_not_found() {
        let err = ReadCommand::new(storage())
            .execute(ReadMessage { id: 2 })
            .unwrap_err();
        assert_eq!(err, CoreError::NotFound { id: 2 });
    }

    #[test]
    fn update_passes_changes_through() {
        let result = UpdateCommand::new(storage())
            .execute(UpdateMessage {
                id: 1,
                changes: NoteChanges::from_fields("", "C"),
            })
            .unwrap();
        assert_eq!(result.note, Note::new(1, "A", "C"));
    }

    #[test]
    fn commands_share_one_backend() {
        let storage = storage();
        let create = CreateCommand::new(Arc::clone(&storage));
        let delete = DeleteCommand::new(Arc::clone(&storage));
        let read_all = ReadAllCommand::new(storage);

        create
            .execute(CreateMessage {
                name: "x".into(),
                content: "y".into(),
            })
            .unwrap();
        let deleted = delete.execute(DeleteMessage { id: 1 }).unwrap();
        assert_eq!(deleted.note, Note::new(1, "A", "B"));

        let all = read_all.execute(ReadAllMessage).unwrap();
        assert_eq!(all.notes, vec![Note::new(2, "x", "y")]);
    }
}
