//! HTTP front-end for jotter.
//!
//! This crate exposes the note use-cases over a single route, `/notes/`,
//! dispatched by method:
//!
//! | Method   | Use-case                                   |
//! |----------|--------------------------------------------|
//! | `GET`    | read-all, or read when `?id=` is present   |
//! | `POST`   | create (JSON body `{name, content}`)       |
//! | `PUT`    | update `?id=` (JSON body, fields optional) |
//! | `DELETE` | delete `?id=`                              |
//!
//! Any other method is answered with `405 Method Not Allowed`, and `/notes`
//! redirects to `/notes/`.

pub mod api;
pub mod error;
pub mod parser;
pub mod presenter;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use presenter::JsonPresenter;
pub use server::WebServer;
pub use state::AppState;

/// The single route every note operation is served on.
pub const NOTES_PATH: &str = "/notes/";

/// Web server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// The address to bind the HTTP server to.
    pub bind_addr: String,
    /// The port to listen on.
    pub port: u16,
}

impl WebConfig {
    /// Return the `host:port` string this configuration binds to.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".into(),
            port: 8080,
        }
    }
}
