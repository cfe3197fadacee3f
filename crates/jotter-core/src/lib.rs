//! Use-case layer for jotter.
//!
//! - **[`command`]** -- the five note use-cases behind the [`Command`] trait.
//! - **[`message`]** -- typed messages in, typed results out.
//! - **[`usecase`]** -- the [`Usecase`] bundle, where a concrete
//!   [`Storage`](jotter_store::Storage) backend is plugged in.
//! - **[`presenter`]** -- the [`Presenter`] capability front-ends implement.
//! - **[`error`]** -- [`CoreError`], with an explicit not-found variant.
//!
//! Front-ends build a message with their own parser, run it through the
//! matching command and render the result with their own presenter.

pub mod command;
pub mod error;
pub mod message;
pub mod presenter;
pub mod usecase;

pub use command::{
    Command, CreateCommand, DeleteCommand, ReadAllCommand, ReadCommand, UpdateCommand,
};
pub use error::{CoreError, Result};
pub use message::{
    CreateMessage, CreateResult, DeleteMessage, DeleteResult, ReadAllMessage, ReadAllResult,
    ReadMessage, ReadResult, UpdateMessage, UpdateResult,
};
pub use presenter::Presenter;
pub use usecase::Usecase;
