//! Composition roots.
//!
//! [`new_application`] plugs a storage backend into the [`Usecase`] bundle
//! and hands it to the front-end picked by [`AppMode`].

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use jotter_core::Usecase;
use jotter_store::Storage;
use jotter_web::{WebConfig, WebServer};

use crate::repl::ReplApplication;

/// Which front-end to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Line-oriented REPL on stdin/stdout.
    Repl,
    /// HTTP server on `/notes/`.
    Http { config: WebConfig },
}

/// A runnable front-end.
#[async_trait]
pub trait Application: Send {
    /// Run until the front-end finishes (REPL exit, server shutdown).
    async fn run(self: Box<Self>) -> Result<()>;
}

/// Wire `storage` through the use-cases into the front-end for `mode`.
pub fn new_application(mode: AppMode, storage: Arc<dyn Storage>) -> Box<dyn Application> {
    let usecase = Usecase::new(storage);
    match mode {
        AppMode::Repl => Box::new(ReplApplication::new(usecase)),
        AppMode::Http { config } => Box::new(WebServer::new(config, usecase)),
    }
}

#[async_trait]
impl Application for ReplApplication {
    async fn run(self: Box<Self>) -> Result<()> {
        // stdin reads block, keep them off the async workers.
        tokio::task::spawn_blocking(move || {
            let stdin = io::stdin();
            let stdout = io::stdout();
            self.run_with(stdin.lock(), stdout.lock())
        })
        .await
        .context("REPL task failed")?
    }
}

#[async_trait]
impl Application for WebServer {
    async fn run(self: Box<Self>) -> Result<()> {
        let addr = self.addr();
        (*self)
            .start()
            .await
            .with_context(|| format!("web server on {addr} failed"))
    }
}
