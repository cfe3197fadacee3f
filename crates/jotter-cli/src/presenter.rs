//! Console rendering of use-case results.

use std::fmt::Display;
use std::io::{self, Write};

use jotter_core::Presenter;
use serde::Serialize;

/// Writes results, errors and the prompt to a console sink.
pub struct ConsolePresenter<W> {
    out: W,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write `prompt` without a newline and flush so it shows up before input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{prompt}")?;
        self.out.flush()
    }

    /// Report a failed line.
    pub fn present_error(&mut self, err: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "error: {err}")?;
        self.out.flush()
    }

    /// End the current line, e.g. after EOF left the cursor on the prompt.
    pub fn newline(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    type Output = io::Result<()>;

    fn present<R>(&mut self, result: &R) -> io::Result<()>
    where
        R: Serialize + Display,
    {
        writeln!(self.out, "{result}")?;
        self.out.flush()
    }
}
