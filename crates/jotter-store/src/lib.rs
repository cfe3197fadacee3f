//! # jotter-store
//!
//! Note entity and storage backends for jotter.
//!
//! The [`Storage`] trait is the only thing the use-case layer knows about;
//! [`InMemoryStorage`] is the backend shipped today.
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │  Storage (trait, Send + Sync)             │
//! ├───────────────────────────────────────────┤
//! │  InMemoryStorage                          │
//! │    DashMap<NoteId, Note>  (per-entry lock) │
//! │    AtomicU64              (id counter)     │
//! └───────────────────────────────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```
//! use jotter_store::{InMemoryStorage, NoteChanges, Storage};
//!
//! let store = InMemoryStorage::new();
//! let note = store.create("groceries".into(), "milk".into()).unwrap();
//! let note = store
//!     .update(note.id, NoteChanges::from_fields("", "milk, eggs"))
//!     .unwrap();
//! assert_eq!(note.name, "groceries");
//! ```

pub mod error;
pub mod memory;
pub mod note;
pub mod storage;

// ── re-exports ───────────────────────────────────────────────────────

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStorage;
pub use note::{Note, NoteChanges, NoteId};
pub use storage::Storage;
