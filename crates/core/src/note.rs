//! The note entity and its validation rules.

use crate::constants::{MAX_TITLE_CHARS, MISSING_FIELDS_MESSAGE, TITLE_TOO_LONG_MESSAGE};
use crate::{NoteError, NoteResult};
use bson::oid::ObjectId;
use chrono::{DateTime, Duration, Utc};
use notes_types::{NonEmptyText, TextError};
use std::str::FromStr;

/// Server-assigned note identifier.
///
/// Backed by a MongoDB `ObjectId` for both store implementations and rendered
/// as 24 lowercase hex characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(ObjectId);

impl NoteId {
    /// Allocates a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parses a client-supplied identifier.
    ///
    /// A malformed identifier cannot name a stored note, so it is reported as
    /// [`NoteError::NotFound`].
    pub fn parse(input: &str) -> NoteResult<Self> {
        input
            .parse()
            .map_err(|_| NoteError::NotFound(input.to_string()))
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for NoteId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for NoteId {
    type Err = bson::oid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s).map(Self)
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// A persisted note.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a new note from validated fields, stamping both timestamps with `now`.
    pub fn new(title: NoteTitle, content: NoteContent, now: DateTime<Utc>) -> Self {
        let now = truncate_to_millis(now);
        Self {
            id: NoteId::new(),
            title: title.into_inner(),
            content: content.into_inner(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies `changes` and refreshes `updated_at` so that it strictly advances.
    pub fn apply(&mut self, changes: ValidatedChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title.into_inner();
        }
        if let Some(content) = changes.content {
            self.content = content.into_inner();
        }
        self.updated_at = next_updated_at(self.updated_at, now);
    }
}

/// A validated note title: non-empty and at most [`MAX_TITLE_CHARS`] characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteTitle(NonEmptyText);

impl NoteTitle {
    pub fn new(input: impl Into<String>) -> NoteResult<Self> {
        NonEmptyText::with_max_chars(input, MAX_TITLE_CHARS)
            .map(Self)
            .map_err(validation_error)
    }

    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

/// Validated note content: non-empty, unbounded length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteContent(NonEmptyText);

impl NoteContent {
    pub fn new(input: impl Into<String>) -> NoteResult<Self> {
        NonEmptyText::new(input)
            .map(Self)
            .map_err(validation_error)
    }

    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

fn validation_error(err: TextError) -> NoteError {
    match err {
        TextError::Empty => NoteError::Validation(MISSING_FIELDS_MESSAGE.into()),
        TextError::TooLong { .. } => NoteError::Validation(TITLE_TOO_LONG_MESSAGE.into()),
    }
}

/// Requested changes to an existing note. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteChanges {
    /// Validates every provided field.
    pub fn validate(self) -> NoteResult<ValidatedChanges> {
        Ok(ValidatedChanges {
            title: self.title.map(NoteTitle::new).transpose()?,
            content: self.content.map(NoteContent::new).transpose()?,
        })
    }
}

/// [`NoteChanges`] whose provided fields passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedChanges {
    title: Option<NoteTitle>,
    content: Option<NoteContent>,
}

/// Drops sub-millisecond precision, matching what a BSON date can hold.
pub fn truncate_to_millis(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ts.timestamp_millis()).unwrap_or(ts)
}

/// The next `updated_at` value: `now`, bumped past `previous` when the clock
/// has not moved on by at least one millisecond.
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let now = truncate_to_millis(now);
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}
