//! MongoDB-backed note store.
//!
//! Notes live in the `notes` collection as
//! `{ _id: ObjectId, title, content, createdAt: Date, updatedAt: Date }`.

use super::NoteStore;
use crate::connection::MongoConnector;
use crate::constants::NOTES_COLLECTION_NAME;
use crate::note::{Note, NoteId};
use crate::NoteResult;
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::doc;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::Collection;
use serde::{Deserialize, Serialize};

/// On-disk shape of a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    content: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl From<&Note> for NoteDocument {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id.object_id(),
            title: note.title.clone(),
            content: note.content.clone(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

impl From<NoteDocument> for Note {
    fn from(doc: NoteDocument) -> Self {
        Self {
            id: NoteId::from(doc.id),
            title: doc.title,
            content: doc.content,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// Note store on top of a lazily connected MongoDB database.
#[derive(Debug)]
pub struct MongoNoteStore {
    connector: MongoConnector,
}

impl MongoNoteStore {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            connector: MongoConnector::new(uri),
        }
    }

    pub fn connector(&self) -> &MongoConnector {
        &self.connector
    }

    async fn collection(&self) -> NoteResult<Collection<NoteDocument>> {
        let db = self.connector.ensure_connected().await?;
        Ok(db.collection::<NoteDocument>(NOTES_COLLECTION_NAME))
    }
}

#[async_trait]
impl NoteStore for MongoNoteStore {
    async fn count(&self) -> NoteResult<u64> {
        let count = self.collection().await?.count_documents(doc! {}).await?;
        Ok(count)
    }

    async fn list(&self) -> NoteResult<Vec<Note>> {
        let cursor = self
            .collection()
            .await?
            .find(doc! {})
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await?;
        let docs: Vec<NoteDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Note::from).collect())
    }

    async fn find(&self, id: &NoteId) -> NoteResult<Option<Note>> {
        let found = self
            .collection()
            .await?
            .find_one(doc! { "_id": id.object_id() })
            .await?;
        Ok(found.map(Note::from))
    }

    async fn insert(&self, note: &Note) -> NoteResult<()> {
        self.collection()
            .await?
            .insert_one(NoteDocument::from(note))
            .await?;
        Ok(())
    }

    async fn insert_many(&self, notes: &[Note]) -> NoteResult<()> {
        if notes.is_empty() {
            return Ok(());
        }
        let docs: Vec<NoteDocument> = notes.iter().map(NoteDocument::from).collect();
        self.collection().await?.insert_many(docs).await?;
        Ok(())
    }

    async fn update(&self, note: &Note) -> NoteResult<bool> {
        let result = self
            .collection()
            .await?
            .update_one(
                doc! { "_id": note.id.object_id() },
                doc! {
                    "$set": {
                        "title": note.title.as_str(),
                        "content": note.content.as_str(),
                        "updatedAt": bson::DateTime::from_chrono(note.updated_at),
                    }
                },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &NoteId) -> NoteResult<bool> {
        let result = self
            .collection()
            .await?
            .delete_one(doc! { "_id": id.object_id() })
            .await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{NoteContent, NoteTitle};
    use crate::NoteError;

    #[test]
    fn document_uses_mongo_field_names() {
        let note = Note::new(
            NoteTitle::new("A").unwrap(),
            NoteContent::new("B").unwrap(),
            Utc::now(),
        );
        let raw = bson::to_document(&NoteDocument::from(&note)).unwrap();

        assert_eq!(raw.get_object_id("_id").unwrap(), note.id.object_id());
        assert_eq!(raw.get_str("title").unwrap(), "A");
        assert_eq!(raw.get_str("content").unwrap(), "B");
        assert!(raw.get_datetime("createdAt").is_ok());
        assert!(raw.get_datetime("updatedAt").is_ok());
    }

    #[test]
    fn document_round_trip_preserves_millisecond_timestamps() {
        let note = Note::new(
            NoteTitle::new("A").unwrap(),
            NoteContent::new("B").unwrap(),
            Utc::now(),
        );
        let raw = bson::to_document(&NoteDocument::from(&note)).unwrap();
        let back: NoteDocument = bson::from_document(raw).unwrap();
        assert_eq!(Note::from(back), note);
    }

    #[tokio::test]
    async fn operations_fail_with_connection_error_on_bad_uri() {
        let store = MongoNoteStore::new("definitely not a uri");
        let err = store.count().await.unwrap_err();
        assert!(matches!(err, NoteError::Connection(_)));
        assert!(!store.connector().is_connected());
    }
}
