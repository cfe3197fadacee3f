//! Subcommand `jotter repl`: the line-oriented note REPL.
//!
//! Reads one command per line, runs it through the matching use-case and
//! prints the result.  A bad line is reported and the loop moves on; only
//! `exit`, end of input or a console I/O failure end the session.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use jotter_core::{Command, Presenter, Usecase};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ReplError;
use crate::parser::{FromRepl, ReplCommand, tokenize};
use crate::presenter::ConsolePresenter;

const PROMPT: &str = "REPL > ";
const EXIT_COMMAND: &str = "exit";

/// The REPL front-end over a [`Usecase`] bundle.
pub struct ReplApplication {
    usecase: Usecase,
}

impl ReplApplication {
    pub fn new(usecase: Usecase) -> Self {
        Self { usecase }
    }

    /// Run the loop over arbitrary console streams.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading `input` or writing `output` fails.
    pub fn run_with<R, W>(&self, mut input: R, output: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut presenter = ConsolePresenter::new(output);
        let mut line_buf = String::new();

        loop {
            presenter
                .prompt(PROMPT)
                .context("failed to write prompt")?;

            line_buf.clear();
            let bytes_read = input
                .read_line(&mut line_buf)
                .context("failed to read input")?;
            if bytes_read == 0 {
                presenter.newline().context("failed to write output")?;
                info!("EOF received, exiting");
                break;
            }

            let trimmed = line_buf.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == EXIT_COMMAND {
                info!("user requested exit");
                break;
            }

            match self.handle_line(trimmed, &mut presenter) {
                Ok(()) => {}
                Err(ReplError::Io(e)) => return Err(e).context("failed to write output"),
                Err(e) => {
                    debug!(error = %e, "command failed");
                    presenter
                        .present_error(&e)
                        .context("failed to write output")?;
                }
            }
        }

        Ok(())
    }

    fn handle_line<W: Write>(
        &self,
        line: &str,
        presenter: &mut ConsolePresenter<W>,
    ) -> Result<(), ReplError> {
        let tokens = tokenize(line);
        let keyword = tokens.first().map(String::as_str).unwrap_or_default();
        let command: ReplCommand = keyword.parse()?;
        debug!(command = ?command, "dispatching");

        match command {
            ReplCommand::Create => run_command(&self.usecase.create, &tokens, presenter),
            ReplCommand::Read => run_command(&self.usecase.read, &tokens, presenter),
            ReplCommand::ReadAll => run_command(&self.usecase.read_all, &tokens, presenter),
            ReplCommand::Update => run_command(&self.usecase.update, &tokens, presenter),
            ReplCommand::Delete => run_command(&self.usecase.delete, &tokens, presenter),
        }
    }
}

/// Parse → execute → present for one command.
fn run_command<C, W>(
    command: &C,
    tokens: &[String],
    presenter: &mut ConsolePresenter<W>,
) -> Result<(), ReplError>
where
    C: Command,
    C::Message: FromRepl,
    C::Output: Serialize + Display,
    W: Write,
{
    let message = <C::Message as FromRepl>::from_repl(tokens)?;
    let result = command.execute(message)?;
    presenter.present(&result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use jotter_store::{InMemoryStorage, Storage};

    use super::*;

    fn run(storage: &InMemoryStorage, input: &str) -> String {
        let repl = ReplApplication::new(Usecase::new(Arc::new(storage.clone())));
        let mut out = Vec::new();
        repl.run_with(Cursor::new(input.as_bytes()), &mut out)
            .expect("repl should finish");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn create_then_read_all_prints_the_note() {
        let storage = InMemoryStorage::new();
        let out = run(&storage, "CREATE;foo;bar\nREADALL\nexit\n");

        assert!(out.contains("#1 foo: bar"), "unexpected output: {out}");
        assert_eq!(storage.read(1).unwrap().name, "foo");
    }

    #[test]
    fn bad_id_is_reported_and_session_continues() {
        let storage = InMemoryStorage::new();
        let out = run(&storage, "READ;notanumber\nCREATE;a;b\nexit\n");

        assert!(out.contains("error: invalid note id `notanumber`"));
        assert!(out.contains("#1 a: b"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let storage = InMemoryStorage::new();
        let out = run(&storage, "FROB;1\nexit\n");

        assert!(out.contains("error: unknown command `FROB`"));
    }

    #[test]
    fn missing_note_is_reported_as_not_found() {
        let storage = InMemoryStorage::new();
        let out = run(&storage, "READ;3\nexit\n");

        assert!(out.contains("error: note not found: 3"));
    }

    #[test]
    fn update_and_delete_by_id() {
        let storage = InMemoryStorage::with_notes([("A", "B"), ("C", "D")]);
        let out = run(&storage, "UPDATE;1;;changed\nDELETE;2\nREADALL\nexit\n");

        assert!(out.contains("#1 A: changed"));
        assert!(out.contains("#2 C: D"), "delete echoes the removed note");
        assert_eq!(storage.len(), 1);
        assert!(storage.read(2).is_err());
    }

    #[test]
    fn exit_stops_before_later_lines() {
        let storage = InMemoryStorage::new();
        run(&storage, "  exit  \nCREATE;a;b\n");

        assert!(storage.is_empty());
    }

    #[test]
    fn eof_ends_the_session_cleanly() {
        let storage = InMemoryStorage::new();
        let out = run(&storage, "\n\nCREATE;a;b");

        assert!(out.starts_with(PROMPT));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn empty_store_read_all() {
        let storage = InMemoryStorage::new();
        let out = run(&storage, "READALL\nexit\n");

        assert!(out.contains("(no notes)"));
    }
}
