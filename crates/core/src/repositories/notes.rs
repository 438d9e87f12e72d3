//! Note management.
//!
//! This module provides the list, create, update and delete operations on the
//! notes collection. It owns the rules that hold for every stored note:
//!
//! - `title` is non-empty and at most 100 characters
//! - `content` is non-empty
//! - `id` and `created_at` are assigned once, on creation
//! - `updated_at` starts equal to `created_at` and strictly advances on every update
//!
//! ## Pure Data Operations
//!
//! This module contains **only** data operations. HTTP status mapping and
//! request parsing belong in `api-rest`.

use crate::note::{Note, NoteChanges, NoteContent, NoteId, NoteTitle};
use crate::store::NoteStore;
use crate::{NoteError, NoteResult};
use chrono::Utc;
use std::sync::Arc;

/// Service for note operations on top of a [`NoteStore`].
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    /// Creates a note service over `store`.
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &dyn NoteStore {
        self.store.as_ref()
    }

    /// Lists every note, newest first.
    ///
    /// An empty collection yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Connection` or `NoteError::Store` if the store cannot be read.
    pub async fn list_all(&self) -> NoteResult<Vec<Note>> {
        self.store.list().await
    }

    /// Fetches one note by its client-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` if `id` is malformed or names no stored note.
    pub async fn get(&self, id: &str) -> NoteResult<Note> {
        let note_id = NoteId::parse(id)?;
        self.store
            .find(&note_id)
            .await?
            .ok_or_else(|| NoteError::NotFound(id.to_string()))
    }

    /// Creates and stores a new note.
    ///
    /// The id and both timestamps are assigned here; `created_at` equals
    /// `updated_at` on the returned note.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Validation` if either field is empty or the title is
    /// longer than 100 characters. Storage failures are propagated.
    pub async fn create(&self, title: &str, content: &str) -> NoteResult<Note> {
        let title = NoteTitle::new(title)?;
        let content = NoteContent::new(content)?;

        let note = Note::new(title, content, Utc::now());
        self.store.insert(&note).await?;

        tracing::debug!("Created note {}", note.id);
        Ok(note)
    }

    /// Applies `changes` to an existing note and returns the updated note.
    ///
    /// Only fields present in `changes` are replaced. `updated_at` is always
    /// refreshed and is guaranteed to be later than its previous value.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::Validation` if a provided field is invalid and
    /// `NoteError::NotFound` if the note does not exist (including when it is
    /// deleted between the lookup and the write).
    pub async fn update(&self, id: &str, changes: NoteChanges) -> NoteResult<Note> {
        let changes = changes.validate()?;
        let mut note = self.get(id).await?;

        note.apply(changes, Utc::now());

        if !self.store.update(&note).await? {
            return Err(NoteError::NotFound(id.to_string()));
        }

        tracing::debug!("Updated note {}", note.id);
        Ok(note)
    }

    /// Permanently removes a note.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` if `id` is malformed or names no stored note.
    pub async fn delete(&self, id: &str) -> NoteResult<()> {
        let note_id = NoteId::parse(id)?;
        if !self.store.delete(&note_id).await? {
            return Err(NoteError::NotFound(id.to_string()));
        }

        tracing::debug!("Deleted note {}", note_id);
        Ok(())
    }
}
