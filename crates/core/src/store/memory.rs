use super::NoteStore;
use crate::note::{Note, NoteId};
use crate::NoteResult;
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local note store. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: RwLock<HashMap<NoteId, Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn count(&self) -> NoteResult<u64> {
        Ok(self.notes.read().await.len() as u64)
    }

    async fn list(&self) -> NoteResult<Vec<Note>> {
        let mut notes: Vec<Note> = self.notes.read().await.values().cloned().collect();
        notes.sort_by_key(|n| Reverse((n.created_at, n.id)));
        Ok(notes)
    }

    async fn find(&self, id: &NoteId) -> NoteResult<Option<Note>> {
        Ok(self.notes.read().await.get(id).cloned())
    }

    async fn insert(&self, note: &Note) -> NoteResult<()> {
        self.notes.write().await.insert(note.id, note.clone());
        Ok(())
    }

    async fn insert_many(&self, notes: &[Note]) -> NoteResult<()> {
        let mut guard = self.notes.write().await;
        for note in notes {
            guard.insert(note.id, note.clone());
        }
        Ok(())
    }

    async fn update(&self, note: &Note) -> NoteResult<bool> {
        let mut guard = self.notes.write().await;
        match guard.get_mut(&note.id) {
            Some(stored) => {
                stored.title.clone_from(&note.title);
                stored.content.clone_from(&note.content);
                stored.updated_at = note.updated_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &NoteId) -> NoteResult<bool> {
        Ok(self.notes.write().await.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{NoteContent, NoteTitle};
    use chrono::{TimeZone, Utc};

    fn note_at(title: &str, ms: i64) -> Note {
        Note::new(
            NoteTitle::new(title).unwrap(),
            NoteContent::new("content").unwrap(),
            Utc.timestamp_millis_opt(ms).unwrap(),
        )
    }

    #[tokio::test]
    async fn list_is_newest_first_regardless_of_insertion_order() {
        let store = MemoryNoteStore::new();
        for (title, ms) in [("middle", 2_000), ("oldest", 1_000), ("newest", 3_000)] {
            store.insert(&note_at(title, ms)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn equal_timestamps_order_by_id_descending() {
        let store = MemoryNoteStore::new();
        let first = note_at("first", 1_000);
        let second = note_at("second", 1_000);
        store.insert_many(&[first.clone(), second.clone()]).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0].id, first.id.max(second.id));
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_notes() {
        let store = MemoryNoteStore::new();
        let note = note_at("ghost", 1_000);

        assert!(!store.update(&note).await.unwrap());
        assert!(!store.delete(&note.id).await.unwrap());

        store.insert(&note).await.unwrap();
        assert!(store.update(&note).await.unwrap());
        assert!(store.delete(&note.id).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_never_touches_created_at() {
        let store = MemoryNoteStore::new();
        let note = note_at("title", 1_000);
        store.insert(&note).await.unwrap();

        let mut changed = note.clone();
        changed.title = "renamed".into();
        changed.created_at = Utc.timestamp_millis_opt(9_000).unwrap();
        changed.updated_at = Utc.timestamp_millis_opt(9_000).unwrap();
        store.update(&changed).await.unwrap();

        let stored = store.find(&note.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "renamed");
        assert_eq!(stored.created_at, note.created_at);
        assert_eq!(stored.updated_at, changed.updated_at);
    }
}
