//! HTTP error responses.
//!
//! Every failure a handler can hit is an [`ApiError`]; it renders as a JSON
//! body `{"error": "<message>"}` with a status code chosen per variant.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jotter_core::CoreError;
use serde_json::json;

/// Errors surfaced by the note handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `id` query parameter is not a non-negative integer.
    #[error("invalid note id `{0}`: expected a non-negative integer")]
    InvalidId(String),

    /// The operation needs an `id` query parameter and none was given.
    #[error("missing `id` query parameter")]
    MissingId,

    /// The query string could not be deserialized.
    #[error("invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    /// The JSON request body could not be read.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The use-case itself failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    /// The status code this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId(_) | Self::MissingId | Self::InvalidQuery(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Core(CoreError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
