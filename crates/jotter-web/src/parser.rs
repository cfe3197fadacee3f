//! Builds use-case messages from HTTP requests.
//!
//! The target note is always named by the `id` query parameter; create and
//! update read their fields from a JSON body.

use jotter_core::{CreateMessage, DeleteMessage, ReadMessage, UpdateMessage};
use jotter_store::{NoteChanges, NoteId};
use serde::Deserialize;

use crate::error::ApiError;

/// Query string accepted on `/notes/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotesQuery {
    pub id: Option<String>,
}

impl NotesQuery {
    /// The raw `id` parameter; an empty value counts as absent.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    fn required_id(&self) -> Result<NoteId, ApiError> {
        self.id().ok_or(ApiError::MissingId).and_then(parse_id)
    }
}

/// Body of `POST /notes/`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateNoteRequest {
    pub name: String,
    pub content: String,
}

/// Body of `PUT /notes/?id=`. Absent or empty fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateNoteRequest {
    pub name: Option<String>,
    pub content: Option<String>,
}

/// Parse a note id from its query-string form.
pub fn parse_id(raw: &str) -> Result<NoteId, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidId(raw.to_owned()))
}

/// Conversion from the request parts of one HTTP operation.
pub trait FromHttp: Sized {
    type Request;

    fn from_http(request: Self::Request) -> Result<Self, ApiError>;
}

impl FromHttp for ReadMessage {
    type Request = NotesQuery;

    fn from_http(query: NotesQuery) -> Result<Self, ApiError> {
        Ok(Self {
            id: query.required_id()?,
        })
    }
}

impl FromHttp for CreateMessage {
    type Request = CreateNoteRequest;

    fn from_http(body: CreateNoteRequest) -> Result<Self, ApiError> {
        Ok(Self {
            name: body.name,
            content: body.content,
        })
    }
}

impl FromHttp for UpdateMessage {
    type Request = (NotesQuery, UpdateNoteRequest);

    fn from_http((query, body): (NotesQuery, UpdateNoteRequest)) -> Result<Self, ApiError> {
        Ok(Self {
            id: query.required_id()?,
            changes: NoteChanges::from_fields(
                body.name.unwrap_or_default(),
                body.content.unwrap_or_default(),
            ),
        })
    }
}

impl FromHttp for DeleteMessage {
    type Request = NotesQuery;

    fn from_http(query: NotesQuery) -> Result<Self, ApiError> {
        Ok(Self {
            id: query.required_id()?,
        })
    }
}
