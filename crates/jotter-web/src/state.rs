//! Shared application state for the web server.
//!
//! [`AppState`] is wrapped in an `Arc` and shared across all request
//! handlers.  The storage behind [`Usecase`] does its own locking, so the
//! state itself needs none.

use jotter_core::Usecase;

use crate::WebConfig;

/// Shared state accessible from every Axum handler.
#[derive(Clone)]
pub struct AppState {
    /// The note use-cases, wired to the server's storage backend.
    pub usecase: Usecase,

    /// Web server configuration.
    pub config: WebConfig,
}
