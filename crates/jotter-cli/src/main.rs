//! CLI entry point for jotter.
//!
//! This binary provides the `jotter` command: `jotter repl` (the default)
//! runs the line-oriented REPL, `jotter serve` exposes the same notes over
//! HTTP.  Both front-ends share one in-memory store per process.

mod app;
mod cli;
mod error;
mod helpers;
mod parser;
mod presenter;
mod repl;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use jotter_store::{InMemoryStorage, Storage};
use tracing::info;

use crate::app::new_application;
use crate::cli::Cli;
use crate::helpers::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mode = cli.mode();
    info!(mode = ?mode, version = env!("CARGO_PKG_VERSION"), "starting jotter");

    let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
    new_application(mode, storage).run().await?;

    info!("shutting down");
    Ok(())
}
