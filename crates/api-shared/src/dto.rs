//! JSON request and response bodies.
//!
//! Field names are camelCase on the wire. Timestamps are RFC 3339 UTC strings
//! with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`.

use chrono::SecondsFormat;
use notes_core::{Note, NoteChanges};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteRes {
    /// 24-character hex identifier.
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Note> for NoteRes {
    fn from(note: Note) -> Self {
        Self {
            id: note.id.to_string(),
            title: note.title,
            content: note.content,
            created_at: note.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            updated_at: note.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Body of `POST /notes`. Both fields are required; they are optional here so a
/// missing field yields a 400 with a useful message instead of a decode error.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CreateNoteReq {
    /// Returns `(title, content)` when both are present and non-empty.
    /// Whitespace-only text counts as provided.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let title = self.title.as_deref().filter(|t| !t.is_empty())?;
        let content = self.content.as_deref().filter(|c| !c.is_empty())?;
        Some((title, content))
    }
}

/// Body of `PUT /notes/{id}`. Absent fields keep their stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<UpdateNoteReq> for NoteChanges {
    fn from(req: UpdateNoteReq) -> Self {
        NoteChanges {
            title: req.title,
            content: req.content,
        }
    }
}

/// Confirmation returned by `DELETE /notes/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteNoteRes {
    pub message: String,
}

/// Result of `GET /seed`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedRes {
    pub success: bool,
    pub message: String,
}

/// Error body for every non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}
