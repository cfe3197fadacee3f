//! Main web server setup and startup.
//!
//! [`WebServer`] composes the Axum router, registers the `/notes/` route and
//! serves it until Ctrl-C is received.  Requests to `/notes` without the
//! trailing slash are redirected there with their query string intact.

use std::io;
use std::sync::Arc;

use axum::Router;
use axum::http::Uri;
use axum::response::Redirect;
use axum::routing::{any, get};
use jotter_core::Usecase;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{NOTES_PATH, WebConfig, api};

/// The jotter HTTP server.
pub struct WebServer {
    state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server serving `usecase`.
    pub fn new(config: WebConfig, usecase: Usecase) -> Self {
        Self {
            state: Arc::new(AppState { usecase, config }),
        }
    }

    /// Return the `host:port` string this server will bind to.
    pub fn addr(&self) -> String {
        self.state.config.addr()
    }

    /// Build the Axum router with all routes registered.
    pub fn router(&self) -> Router {
        router(Arc::clone(&self.state))
    }

    /// Bind the configured address and serve until shut down.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot be bound or the server
    /// fails while running.
    pub async fn start(self) -> io::Result<()> {
        let addr = self.addr();
        let listener = TcpListener::bind(&addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C is received.
    pub async fn serve(self, listener: TcpListener) -> io::Result<()> {
        let router = self.router();

        tracing::info!(
            addr = %listener.local_addr()?,
            configured = %self.state.config.addr(),
            "starting web server"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("web server stopped");
        Ok(())
    }
}

/// Build the note router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            NOTES_PATH,
            get(api::get_notes)
                .post(api::create_note)
                .put(api::update_note)
                .delete(api::delete_note),
        )
        .route(NOTES_PATH.trim_end_matches('/'), any(redirect_to_notes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn redirect_to_notes(uri: Uri) -> Redirect {
    match uri.query() {
        Some(query) => Redirect::permanent(&format!("{NOTES_PATH}?{query}")),
        None => Redirect::permanent(NOTES_PATH),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C, graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
