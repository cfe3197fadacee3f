//! CLI argument definitions for jotter.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! wiring the chosen front-end.

use clap::{Parser, Subcommand};
use jotter_web::WebConfig;

use crate::app::AppMode;

/// jotter -- a minimal note-taking service.
#[derive(Debug, Parser)]
#[command(
    name = "jotter",
    version,
    about = "jotter -- a minimal note-taking service",
    long_about = "Create, read, update and delete notes from an interactive REPL \
                  or over a small HTTP API. Notes live in memory for the lifetime \
                  of the process."
)]
pub struct Cli {
    /// Default log level when `RUST_LOG` is not set.
    #[arg(long, global = true, env = "JOTTER_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive REPL on stdin/stdout (the default).
    Repl,

    /// Serve the notes API over HTTP on `/notes/`.
    Serve {
        /// Address to bind the HTTP server to.
        #[arg(long, env = "JOTTER_BIND", default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on.
        #[arg(long, short, env = "JOTTER_PORT", default_value_t = 8080)]
        port: u16,
    },
}

impl Cli {
    /// The front-end selected on the command line.
    pub fn mode(&self) -> AppMode {
        match &self.command {
            None | Some(Commands::Repl) => AppMode::Repl,
            Some(Commands::Serve { bind, port }) => AppMode::Http {
                config: WebConfig {
                    bind_addr: bind.clone(),
                    port: *port,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_repl() {
        let cli = Cli::try_parse_from(["jotter"]).unwrap();
        assert_eq!(cli.mode(), AppMode::Repl);
    }

    #[test]
    fn serve_takes_bind_and_port() {
        let cli =
            Cli::try_parse_from(["jotter", "serve", "--bind", "0.0.0.0", "-p", "9001"]).unwrap();
        assert_eq!(
            cli.mode(),
            AppMode::Http {
                config: WebConfig {
                    bind_addr: "0.0.0.0".into(),
                    port: 9001,
                },
            }
        );
    }

    #[test]
    fn log_level_is_global() {
        let cli = Cli::try_parse_from(["jotter", "repl", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["jotter", "frobnicate"]).is_err());
    }
}
