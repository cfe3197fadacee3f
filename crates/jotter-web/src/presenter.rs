//! JSON rendering of use-case results.

use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jotter_core::Presenter;
use serde::Serialize;

/// Renders a result as a JSON response body with a fixed status code.
#[derive(Debug, Clone, Copy)]
pub struct JsonPresenter {
    status: StatusCode,
}

impl JsonPresenter {
    /// `200 OK`.
    pub fn ok() -> Self {
        Self {
            status: StatusCode::OK,
        }
    }

    /// `201 Created`.
    pub fn created() -> Self {
        Self {
            status: StatusCode::CREATED,
        }
    }
}

impl Presenter for JsonPresenter {
    type Output = Response;

    fn present<R>(&mut self, result: &R) -> Response
    where
        R: Serialize + Display,
    {
        (self.status, Json(result)).into_response()
    }
}
