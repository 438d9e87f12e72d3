//! One-time seeding of the default notes.

use crate::constants::DEFAULT_NOTES;
use crate::note::{Note, NoteContent, NoteTitle};
use crate::repositories::notes::NoteService;
use crate::NoteResult;
use chrono::Utc;

/// What a call to [`NoteService::seed_if_empty`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection was empty and this many default notes were inserted.
    Seeded(usize),
    /// The collection already held this many notes; nothing was written.
    AlreadyPopulated(u64),
}

/// Builds the default notes, all stamped with the same `created_at`.
pub fn default_notes() -> NoteResult<Vec<Note>> {
    let now = Utc::now();
    DEFAULT_NOTES
        .iter()
        .map(|(title, content)| -> NoteResult<Note> {
            Ok(Note::new(
                NoteTitle::new(*title)?,
                NoteContent::new(*content)?,
                now,
            ))
        })
        .collect()
}

impl NoteService {
    /// Inserts the default notes if and only if the collection is empty.
    ///
    /// Existing data is never overwritten or deduplicated against: any note at
    /// all in the collection suppresses seeding. The defaults go in as one batch.
    ///
    /// # Errors
    ///
    /// Count and insert failures are logged and returned.
    pub async fn seed_if_empty(&self) -> NoteResult<SeedOutcome> {
        let result = self.seed_if_empty_inner().await;
        match &result {
            Ok(SeedOutcome::Seeded(n)) => {
                tracing::info!("Database seeded successfully with {} default notes", n)
            }
            Ok(SeedOutcome::AlreadyPopulated(count)) => {
                tracing::info!("Database already has {} notes, skipping seed", count)
            }
            Err(e) => tracing::error!("Error seeding database: {:?}", e),
        }
        result
    }

    async fn seed_if_empty_inner(&self) -> NoteResult<SeedOutcome> {
        let count = self.store().count().await?;
        if count > 0 {
            return Ok(SeedOutcome::AlreadyPopulated(count));
        }

        tracing::info!("Seeding database with default notes...");
        let notes = default_notes()?;
        self.store().insert_many(&notes).await?;
        Ok(SeedOutcome::Seeded(notes.len()))
    }
}
