//! Output capability for front-ends.

use std::fmt::Display;

use serde::Serialize;

/// Renders a use-case result for one front-end.
///
/// Results are both [`Serialize`] (for structured sinks such as an HTTP
/// response) and [`Display`] (for a console), so a presenter picks whichever
/// rendering suits its sink.
pub trait Presenter {
    /// What presenting produces: a response value, an I/O outcome, ...
    type Output;

    fn present<R>(&mut self, result: &R) -> Self::Output
    where
        R: Serialize + Display;
}
