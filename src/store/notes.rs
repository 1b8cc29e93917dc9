//! NoteStore — the in-memory note collection.
//!
//! Holds all notes for the lifetime of the process behind a single RwLock.
//! Id assignment happens under the write lock, so concurrent creates can
//! never race the counter, and list iteration never observes a partial
//! write. Ids are monotonically increasing and never reused, even after
//! delete.

use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::errors::StoreError;
use crate::models::{Note, NotePayload};
use crate::validation;

pub struct NoteStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    // Keyed by id; iteration order is id order, which is insertion order.
    notes: BTreeMap<i64, Note>,
    next_id: i64,
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                notes: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Validate, assign the next id, stamp the creation time, and insert.
    pub fn create(&self, payload: &NotePayload) -> Result<Note, StoreError> {
        validation::validate_payload(payload).map_err(StoreError::Validation)?;

        let title = trimmed_title(payload);
        let content = normalize_content(payload.content.as_deref());

        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let note = Note {
            id,
            title,
            content,
            created_at: Utc::now(),
        };
        inner.notes.insert(id, note.clone());

        log::debug!("Created note {}", id);
        Ok(note)
    }

    /// All notes, or only those whose title or content contains the trimmed
    /// keyword case-insensitively. Ordered newest-first; equal timestamps
    /// keep insertion order (stable sort over id-ordered iteration).
    pub fn list(&self, keyword: Option<&str>) -> Vec<Note> {
        let inner = self.inner.read();

        let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
        let mut notes: Vec<Note> = match keyword {
            None => inner.notes.values().cloned().collect(),
            Some(k) => {
                let needle = k.to_lowercase();
                inner
                    .notes
                    .values()
                    .filter(|n| note_matches(n, &needle))
                    .cloned()
                    .collect()
            }
        };

        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notes
    }

    pub fn get(&self, id: i64) -> Result<Note, StoreError> {
        self.inner
            .read()
            .notes
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Overwrite title and content in place. Validation runs before the
    /// existence check, so a bad payload against a missing id reports the
    /// payload errors, and a failed update never mutates the store.
    /// `id` and `created_at` are untouched.
    pub fn update(&self, id: i64, payload: &NotePayload) -> Result<Note, StoreError> {
        validation::validate_payload(payload).map_err(StoreError::Validation)?;

        let title = trimmed_title(payload);
        let content = normalize_content(payload.content.as_deref());

        let mut inner = self.inner.write();
        let note = inner.notes.get_mut(&id).ok_or(StoreError::NotFound)?;
        note.title = title;
        note.content = content;

        log::debug!("Updated note {}", id);
        Ok(note.clone())
    }

    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        match inner.notes.remove(&id) {
            Some(_) => {
                log::debug!("Deleted note {}", id);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }
}

fn trimmed_title(payload: &NotePayload) -> String {
    // Validation guarantees the title is present and non-blank here
    payload.title.as_deref().unwrap_or("").trim().to_string()
}

/// Blank or whitespace-only content normalizes to absent; anything else is
/// stored as sent.
fn normalize_content(content: Option<&str>) -> Option<String> {
    match content {
        Some(c) if !c.trim().is_empty() => Some(c.to_string()),
        _ => None,
    }
}

fn note_matches(note: &Note, needle: &str) -> bool {
    if note.title.to_lowercase().contains(needle) {
        return true;
    }
    note.content
        .as_deref()
        .is_some_and(|c| c.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, content: Option<&str>) -> NotePayload {
        NotePayload {
            title: Some(title.to_string()),
            content: content.map(String::from),
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = NoteStore::new();

        let first = store.create(&payload("First", None)).expect("Failed to create note");
        let second = store.create(&payload("Second", None)).expect("Failed to create note");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.content, None);
    }

    #[test]
    fn test_create_trims_title_and_normalizes_blank_content() {
        let store = NoteStore::new();

        let note = store
            .create(&payload("  Buy milk  ", Some("   ")))
            .expect("Failed to create note");

        assert_eq!(note.title, "Buy milk");
        assert_eq!(note.content, None);
    }

    #[test]
    fn test_create_invalid_title_leaves_store_unchanged() {
        let store = NoteStore::new();

        let result = store.create(&payload("", None));
        match result {
            Err(StoreError::Validation(errors)) => assert!(errors.contains_key("title")),
            other => panic!("Expected validation error, got {:?}", other.map(|n| n.id)),
        }

        let result = store.create(&payload(&"a".repeat(101), None));
        assert!(matches!(result, Err(StoreError::Validation(_))));

        assert!(store.list(None).is_empty());

        // Failed creates must not burn ids
        let note = store.create(&payload("Valid", None)).expect("Failed to create note");
        assert_eq!(note.id, 1);
    }

    #[test]
    fn test_list_orders_newest_first() {
        let store = NoteStore::new();
        store.create(&payload("A", None)).unwrap();
        store.create(&payload("B", None)).unwrap();
        store.create(&payload("C", None)).unwrap();

        let titles: Vec<String> = store.list(None).into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_list_filters_title_and_content_case_insensitively() {
        let store = NoteStore::new();
        store.create(&payload("Buy milk", None)).unwrap();
        store.create(&payload("Call mom", Some("about the MILK run"))).unwrap();
        store.create(&payload("Unrelated", Some("nothing here"))).unwrap();

        let results = store.list(Some("milk"));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|n| n.title.contains("milk") || n.content.is_some()));

        let results = store.list(Some("  MILK  "));
        assert_eq!(results.len(), 2);

        assert!(store.list(Some("xyz")).is_empty());
    }

    #[test]
    fn test_list_blank_keyword_returns_all() {
        let store = NoteStore::new();
        store.create(&payload("One", None)).unwrap();
        store.create(&payload("Two", None)).unwrap();

        assert_eq!(store.list(Some("   ")).len(), 2);
        assert_eq!(store.list(None).len(), 2);
    }

    #[test]
    fn test_get_missing_id_is_not_found() {
        let store = NoteStore::new();
        assert!(matches!(store.get(42), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let store = NoteStore::new();
        let original = store.create(&payload("Original", Some("body"))).unwrap();

        let updated = store
            .update(original.id, &payload("  Renamed  ", None))
            .expect("Failed to update note");

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.content, None);
    }

    #[test]
    fn test_update_invalid_payload_does_not_mutate() {
        let store = NoteStore::new();
        let note = store.create(&payload("Keep me", None)).unwrap();

        let result = store.update(note.id, &payload("", None));
        assert!(matches!(result, Err(StoreError::Validation(_))));

        assert_eq!(store.get(note.id).unwrap().title, "Keep me");
    }

    #[test]
    fn test_update_validation_takes_precedence_over_not_found() {
        let store = NoteStore::new();

        // Bad payload against a missing id reports the payload, not the id
        let result = store.update(999, &payload("", None));
        assert!(matches!(result, Err(StoreError::Validation(_))));

        let result = store.update(999, &payload("Fine title", None));
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[test]
    fn test_delete_twice_is_not_found() {
        let store = NoteStore::new();
        let note = store.create(&payload("Short-lived", None)).unwrap();

        assert!(store.delete(note.id).is_ok());
        assert!(matches!(store.delete(note.id), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_deleted_ids_are_never_reused() {
        let store = NoteStore::new();
        let a = store.create(&payload("A", None)).unwrap();
        let b = store.create(&payload("B", None)).unwrap();

        store.delete(a.id).expect("Failed to delete note");

        assert!(matches!(store.get(a.id), Err(StoreError::NotFound)));
        let remaining = store.list(None);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);

        let c = store.create(&payload("C", None)).unwrap();
        assert_eq!(c.id, 3);
    }
}
