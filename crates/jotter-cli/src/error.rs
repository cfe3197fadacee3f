//! REPL error types.
//!
//! Everything except [`ReplError::Io`] is reported to the user and the loop
//! carries on; an I/O failure on the console ends the session.

use std::io;

use jotter_core::CoreError;

/// Failure while handling one REPL line.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    /// The first token is not a known command keyword.
    #[error("unknown command `{0}`; expected CREATE, READ, READALL, UPDATE, DELETE or exit")]
    UnknownCommand(String),

    /// A token that should be a note id is not a non-negative integer.
    #[error("invalid note id `{0}`: expected a non-negative integer")]
    InvalidId(String),

    /// A required token is missing.
    #[error("{command} is missing its <{argument}> argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// The use-case failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing to the console failed.
    #[error("console i/o error: {0}")]
    Io(#[from] io::Error),
}
