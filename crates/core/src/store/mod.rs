//! Note persistence.
//!
//! [`NoteStore`] is the seam between the note service and the database. The
//! MongoDB implementation is used in production; the in-memory implementation
//! backs tests and database-less local runs.

pub mod memory;
pub mod mongo;

pub use memory::MemoryNoteStore;
pub use mongo::MongoNoteStore;

use crate::config::{NotesConfig, StoreBackend};
use crate::note::{Note, NoteId};
use crate::NoteResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Storage operations on the notes collection.
///
/// Implementations store notes exactly as given: ids and timestamps are
/// assigned by the caller.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Number of stored notes.
    async fn count(&self) -> NoteResult<u64>;

    /// All notes, newest `created_at` first; ties by id, highest first.
    async fn list(&self) -> NoteResult<Vec<Note>>;

    async fn find(&self, id: &NoteId) -> NoteResult<Option<Note>>;

    async fn insert(&self, note: &Note) -> NoteResult<()>;

    /// Inserts a batch in a single write.
    async fn insert_many(&self, notes: &[Note]) -> NoteResult<()>;

    /// Overwrites title, content and `updated_at` of the note with `note.id`.
    ///
    /// Returns `false` when no such note exists.
    async fn update(&self, note: &Note) -> NoteResult<bool>;

    /// Returns `false` when no such note exists.
    async fn delete(&self, id: &NoteId) -> NoteResult<bool>;
}

/// Builds the store selected by `cfg`.
///
/// No I/O happens here; the MongoDB store connects on first use.
pub fn open_store(cfg: &NotesConfig) -> Arc<dyn NoteStore> {
    match cfg.store_backend() {
        StoreBackend::MongoDb => Arc::new(MongoNoteStore::new(cfg.mongodb_uri())),
        StoreBackend::Memory => Arc::new(MemoryNoteStore::new()),
    }
}
