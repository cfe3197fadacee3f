//! The note entity and its partial-update companion.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a note by its storage backend.
pub type NoteId = u64;

/// A single stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Assigned on create, never changed afterwards.
    pub id: NoteId,
    pub name: String,
    pub content: String,
}

impl Note {
    /// Build a note from its parts.
    pub fn new(id: NoteId, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            content: content.into(),
        }
    }

    /// Apply a partial update in place, touching only the fields that are set.
    pub fn apply(&mut self, changes: NoteChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}: {}", self.id, self.name, self.content)
    }
}

/// Fields to overwrite on an existing note.
///
/// `None` leaves the stored value as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub name: Option<String>,
    pub content: Option<String>,
}

impl NoteChanges {
    /// Build changes from raw front-end fields, where an empty string means
    /// "leave unchanged".
    pub fn from_fields(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: non_empty(name.into()),
            content: non_empty(content.into()),
        }
    }

    /// Whether applying these changes would leave a note untouched.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content.is_none()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
