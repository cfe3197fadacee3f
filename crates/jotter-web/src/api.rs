//! Route handlers for `/notes/`.
//!
//! Every handler follows the same path: parse the request into a use-case
//! message, execute the matching command, present the result as JSON.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Response;
use jotter_core::{
    Command, CreateMessage, DeleteMessage, Presenter, ReadAllMessage, ReadMessage, UpdateMessage,
};

use crate::error::ApiError;
use crate::parser::{CreateNoteRequest, FromHttp, NotesQuery, UpdateNoteRequest};
use crate::presenter::JsonPresenter;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /notes/
// ---------------------------------------------------------------------------

/// List every note, or fetch one when `?id=` is given.
pub async fn get_notes(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NotesQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    if query.id().is_none() {
        let result = state.usecase.read_all.execute(ReadAllMessage)?;
        tracing::debug!(count = result.notes.len(), "listed notes");
        return Ok(JsonPresenter::ok().present(&result));
    }

    let message = ReadMessage::from_http(query)?;
    let result = state.usecase.read.execute(message)?;
    Ok(JsonPresenter::ok().present(&result))
}

// ---------------------------------------------------------------------------
// POST /notes/
// ---------------------------------------------------------------------------

/// Create a note from a `{name, content}` body.
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let message = CreateMessage::from_http(body)?;
    let result = state.usecase.create.execute(message)?;

    tracing::info!(note_id = result.note.id, "note created");
    Ok(JsonPresenter::created().present(&result))
}

// ---------------------------------------------------------------------------
// PUT /notes/?id=
// ---------------------------------------------------------------------------

/// Apply a partial update to the note named by `?id=`.
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NotesQuery>, QueryRejection>,
    body: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let Json(body) = body?;
    let message = UpdateMessage::from_http((query, body))?;
    let result = state.usecase.update.execute(message)?;

    tracing::info!(note_id = result.note.id, "note updated");
    Ok(JsonPresenter::ok().present(&result))
}

// ---------------------------------------------------------------------------
// DELETE /notes/?id=
// ---------------------------------------------------------------------------

/// Delete the note named by `?id=` and return its last value.
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NotesQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let message = DeleteMessage::from_http(query)?;
    let result = state.usecase.delete.execute(message)?;

    tracing::info!(note_id = result.note.id, "note deleted");
    Ok(JsonPresenter::ok().present(&result))
}
