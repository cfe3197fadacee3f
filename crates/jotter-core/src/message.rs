//! Messages consumed and results produced by the use-case commands.
//!
//! Results serialize transparently: a read-all result becomes a JSON array of
//! notes, every other result becomes the note object itself.  Their `Display`
//! rendering is what the console front-end prints.

use std::fmt;

use jotter_store::{Note, NoteChanges, NoteId};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Input for listing every note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadAllMessage;

/// Input for fetching one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadMessage {
    pub id: NoteId,
}

/// Input for creating a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateMessage {
    pub name: String,
    pub content: String,
}

/// Input for a partial update of one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMessage {
    pub id: NoteId,
    pub changes: NoteChanges,
}

/// Input for deleting one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteMessage {
    pub id: NoteId,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Every stored note, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReadAllResult {
    pub notes: Vec<Note>,
}

impl fmt::Display for ReadAllResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.notes.is_empty() {
            return f.write_str("(no notes)");
        }
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{note}")?;
        }
        Ok(())
    }
}

macro_rules! note_result {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        #[serde(transparent)]
        pub struct $name {
            pub note: Note,
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.note, f)
            }
        }
    };
}

note_result!(
    /// The requested note.
    ReadResult
);
note_result!(
    /// The newly created note.
    CreateResult
);
note_result!(
    /// The note after the update was applied.
    UpdateResult
);
note_result!(
    /// The last value of the deleted note.
    DeleteResult
);
