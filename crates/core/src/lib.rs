//! # Notes Core
//!
//! Core business logic for the notes service.
//!
//! This crate contains pure data operations:
//! - The note entity and its validation rules
//! - Storage behind the [`NoteStore`] trait (MongoDB or in-memory)
//! - A lazily connected, cached MongoDB handle
//! - One-time seeding of default notes into an empty collection
//!
//! **No API concerns**: HTTP servers, status codes and request parsing belong in `api-rest`
//! or `api-shared`.

pub mod config;
pub mod connection;
pub mod constants;
pub mod error;
pub mod note;
pub mod repositories;
pub mod seed;
pub mod store;

pub use config::{NotesConfig, StoreBackend};
pub use connection::MongoConnector;
pub use constants::DEFAULT_MONGODB_URI;
pub use error::{NoteError, NoteResult};
pub use note::{Note, NoteChanges, NoteId};
pub use repositories::notes::NoteService;
pub use seed::SeedOutcome;
pub use store::{open_store, MemoryNoteStore, MongoNoteStore, NoteStore};
