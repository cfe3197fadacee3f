//! The use-case bundle handed to every front-end.
//!
//! Front-ends depend on [`Usecase`] and the [`Storage`] trait only; which
//! backend is plugged in is decided by whoever calls [`Usecase::new`].

use std::sync::Arc;

use jotter_store::Storage;

use crate::command::{CreateCommand, DeleteCommand, ReadAllCommand, ReadCommand, UpdateCommand};

/// One command per note operation, all sharing the same storage handle.
#[derive(Clone)]
pub struct Usecase {
    pub read_all: ReadAllCommand,
    pub read: ReadCommand,
    pub create: CreateCommand,
    pub update: UpdateCommand,
    pub delete: DeleteCommand,
}

impl Usecase {
    /// Wire every command to `storage`.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            read_all: ReadAllCommand::new(Arc::clone(&storage)),
            read: ReadCommand::new(Arc::clone(&storage)),
            create: CreateCommand::new(Arc::clone(&storage)),
            update: UpdateCommand::new(Arc::clone(&storage)),
            delete: DeleteCommand::new(storage),
        }
    }
}
