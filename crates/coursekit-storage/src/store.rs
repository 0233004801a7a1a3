use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use coursekit_core::collection::Collection;
use coursekit_core::keys;
use coursekit_core::models::notes::NoteField;
use coursekit_core::models::review::ErrorEntry;
use coursekit_core::models::word::WordEntry;

use crate::backend::KeyValueStore;
use crate::clear::{ClearOutcome, ClearRequest, Confirmation};
use crate::error::StorageError;

/// Typed access to the course collections over a key/value backend.
///
/// The store owns its backend; callers inject one instead of reaching for a
/// global. All mutations read the current collection, modify it, and write
/// the whole JSON array back.
pub struct CourseStore<S> {
    backend: S,
}

impl<S: KeyValueStore> CourseStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read a collection. Never fails: an unset key, an unreadable backend,
    /// or undecodable JSON all yield an empty list. Mutations are stricter,
    /// see [`StorageError::Corrupt`].
    pub fn get_collection<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        match self.load(collection) {
            Ok(items) => items,
            Err(e) => {
                warn!(collection = %collection, error = %e, "collection unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn word_bank(&self) -> Vec<WordEntry> {
        self.get_collection(Collection::WordBank)
    }

    pub fn error_review(&self) -> Vec<ErrorEntry> {
        self.get_collection(Collection::ErrorReview)
    }

    /// Append a word unless one with the same word (ignoring case) exists.
    ///
    /// Returns `false` without writing anything for a duplicate.
    pub fn add_word(&mut self, entry: WordEntry) -> Result<bool, StorageError> {
        let mut words: Vec<WordEntry> = self.load(Collection::WordBank)?;

        if words.iter().any(|existing| existing.same_word(&entry.word)) {
            debug!(word = %entry.word, "word already in word bank");
            return Ok(false);
        }

        info!(word = %entry.word, source = %entry.source, "word added to word bank");
        words.push(entry);
        self.store(Collection::WordBank, &words)?;
        Ok(true)
    }

    /// Append a missed question unless its id is already recorded.
    ///
    /// A repeat is silently ignored; the first recording wins.
    pub fn record_error(&mut self, entry: ErrorEntry) -> Result<(), StorageError> {
        let mut errors: Vec<ErrorEntry> = self.load(Collection::ErrorReview)?;

        if errors.iter().any(|existing| existing.id == entry.id) {
            debug!(id = %entry.id, "question already in error review");
            return Ok(());
        }

        info!(id = %entry.id, source = %entry.source, "missed question recorded");
        errors.push(entry);
        self.store(Collection::ErrorReview, &errors)
    }

    /// Flip `is_mastered` on the first entry whose word matches exactly
    /// (case-sensitive). Returns the new value, or `None` if no entry matched.
    pub fn toggle_mastered(&mut self, word: &str) -> Result<Option<bool>, StorageError> {
        let mut words: Vec<WordEntry> = self.load(Collection::WordBank)?;

        let Some(entry) = words.iter_mut().find(|entry| entry.word == word) else {
            debug!(word, "toggle requested for unknown word");
            return Ok(None);
        };

        entry.is_mastered = !entry.is_mastered;
        let mastered = entry.is_mastered;
        self.store(Collection::WordBank, &words)?;

        info!(word, mastered, "mastery toggled");
        Ok(Some(mastered))
    }

    /// First step of a bulk clear. Nothing is removed yet.
    pub fn request_clear(&self, collection: Collection) -> ClearRequest {
        ClearRequest::new(collection)
    }

    /// Second step of a bulk clear: remove the collection only if the
    /// learner accepted the request's prompt.
    pub fn resolve_clear(
        &mut self,
        request: ClearRequest,
        confirmation: Confirmation,
    ) -> Result<ClearOutcome, StorageError> {
        let collection = request.collection();
        match confirmation {
            Confirmation::Accepted => {
                self.backend.remove_item(collection.key())?;
                info!(collection = %collection, "collection cleared");
                Ok(ClearOutcome::Cleared(collection))
            }
            Confirmation::Declined => {
                debug!(collection = %collection, "clear declined");
                Ok(ClearOutcome::Kept(collection))
            }
        }
    }

    /// Persist one 5W1H note field for a lesson.
    pub fn save_note(
        &mut self,
        lesson_id: &str,
        field: NoteField,
        value: &str,
    ) -> Result<(), StorageError> {
        self.backend.set_item(&keys::note(lesson_id, field), value)
    }

    /// Previously saved value of a 5W1H note field, if any.
    pub fn load_note(&self, lesson_id: &str, field: NoteField) -> Option<String> {
        let key = keys::note(lesson_id, field);
        match self.backend.get_item(&key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "note unreadable");
                None
            }
        }
    }

    /// Backend failures and undecodable values both propagate. A value that
    /// cannot be decoded is left in place; it is never rewritten.
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StorageError> {
        let key = collection.key();
        let Some(raw) = self.backend.get_item(key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        })
    }

    fn store<T: Serialize>(&mut self, collection: Collection, items: &[T]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items)?;
        self.backend.set_item(collection.key(), &json)
    }
}
