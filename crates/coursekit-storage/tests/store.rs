use coursekit_core::collection::Collection;
use coursekit_core::models::notes::NoteField;
use coursekit_core::models::review::ErrorEntry;
use coursekit_core::models::word::WordEntry;
use coursekit_storage::backend::KeyValueStore;
use coursekit_storage::clear::{ClearOutcome, Confirmation};
use coursekit_storage::error::StorageError;
use coursekit_storage::memory::MemoryStore;
use coursekit_storage::store::CourseStore;

fn at(ts: &str) -> jiff::Timestamp {
    ts.parse().unwrap()
}

fn word(w: &str) -> WordEntry {
    WordEntry::new(w, "adj", "hard-working", "She is diligent.", "Video 1", at("2025-03-01T08:00:00Z"))
}

fn missed(id: &str, user_answer: &str) -> ErrorEntry {
    ErrorEntry {
        id: id.to_string(),
        question: "What does the speaker recommend?".to_string(),
        user_answer: user_answer.to_string(),
        correct_answer: "Keep a daily list".to_string(),
        source: "Video 1".to_string(),
        date_recorded: at("2025-03-01T09:00:00Z"),
    }
}

#[test]
fn unset_collections_are_empty() {
    let store = CourseStore::new(MemoryStore::new());
    assert!(store.word_bank().is_empty());
    assert!(store.error_review().is_empty());
}

#[test]
fn unparsable_collection_degrades_to_empty() {
    let mut backend = MemoryStore::new();
    backend.set_item("wordBank", "{not json").unwrap();
    backend.set_item("errorReview", "").unwrap();

    let store = CourseStore::new(backend);
    assert!(store.word_bank().is_empty());
    assert!(store.error_review().is_empty());
}

#[test]
fn entries_missing_optional_fields_still_load_and_survive_adds() {
    let mut backend = MemoryStore::new();
    backend
        .set_item(
            "wordBank",
            r#"[{"word":"alpha","definition":"d","example":"e","source":"Video 1","dateAdded":"2024-05-01T10:00:00.000Z"}]"#,
        )
        .unwrap();
    backend
        .set_item(
            "errorReview",
            r#"[{"id":"q1","question":"Q","userAnswer":"A","correctAnswer":"B","dateRecorded":"2024-05-01T10:00:00.000Z"}]"#,
        )
        .unwrap();
    let mut store = CourseStore::new(backend);

    let words = store.word_bank();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].part_of_speech, "");
    assert_eq!(store.error_review()[0].source, "");

    assert!(store.add_word(word("beta")).unwrap());
    let words: Vec<String> = store.word_bank().into_iter().map(|w| w.word).collect();
    assert_eq!(words, ["alpha", "beta"]);

    store.record_error(missed("q2", "C")).unwrap();
    assert_eq!(store.error_review().len(), 2);
}

#[test]
fn undecodable_collection_is_never_overwritten() {
    let mut backend = MemoryStore::new();
    backend.set_item("wordBank", "{not json").unwrap();
    backend.set_item("errorReview", r#"[{"question":"no id"}]"#).unwrap();
    let mut store = CourseStore::new(backend);

    let err = store.add_word(word("beta")).unwrap_err();
    assert!(matches!(err, StorageError::Corrupt { ref key, .. } if key == "wordBank"));
    assert!(matches!(
        store.toggle_mastered("beta").unwrap_err(),
        StorageError::Corrupt { .. }
    ));
    assert!(matches!(
        store.record_error(missed("q1", "A")).unwrap_err(),
        StorageError::Corrupt { ref key, .. } if key == "errorReview"
    ));

    let backend = store.backend();
    assert_eq!(backend.get_item("wordBank").unwrap().as_deref(), Some("{not json"));
    assert_eq!(
        backend.get_item("errorReview").unwrap().as_deref(),
        Some(r#"[{"question":"no id"}]"#)
    );
}

#[test]
fn adding_same_word_in_any_case_keeps_one_entry() {
    let mut store = CourseStore::new(MemoryStore::new());

    assert!(store.add_word(word("diligent")).unwrap());
    assert_eq!(store.word_bank().len(), 1);

    assert!(!store.add_word(word("diligent")).unwrap());
    assert!(!store.add_word(word("DILIGENT")).unwrap());

    let words = store.word_bank();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "diligent");
}

#[test]
fn words_keep_insertion_order() {
    let mut store = CourseStore::new(MemoryStore::new());
    for w in ["agenda", "deadline", "leverage"] {
        store.add_word(word(w)).unwrap();
    }

    let words: Vec<_> = store.word_bank().into_iter().map(|e| e.word).collect();
    assert_eq!(words, ["agenda", "deadline", "leverage"]);
}

#[test]
fn word_bank_is_persisted_as_json_array() {
    let mut store = CourseStore::new(MemoryStore::new());
    store.add_word(word("diligent")).unwrap();

    let raw = store.backend().get_item("wordBank").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["word"], "diligent");
    assert_eq!(json[0]["partOfSpeech"], "adj");
    assert_eq!(json[0]["isMastered"], false);
}

#[test]
fn repeated_error_id_is_ignored() {
    let mut store = CourseStore::new(MemoryStore::new());

    store.record_error(missed("q1", "A")).unwrap();
    store.record_error(missed("q1", "B")).unwrap();
    store.record_error(missed("q2", "D")).unwrap();

    let errors = store.error_review();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].id, "q1");
    assert_eq!(errors[0].user_answer, "A");
}

#[test]
fn toggling_twice_restores_original_state() {
    let mut store = CourseStore::new(MemoryStore::new());
    store.add_word(word("diligent")).unwrap();

    assert_eq!(store.toggle_mastered("diligent").unwrap(), Some(true));
    assert!(store.word_bank()[0].is_mastered);

    assert_eq!(store.toggle_mastered("diligent").unwrap(), Some(false));
    assert!(!store.word_bank()[0].is_mastered);
}

#[test]
fn toggle_is_case_sensitive_and_ignores_unknown_words() {
    let mut store = CourseStore::new(MemoryStore::new());
    store.add_word(word("diligent")).unwrap();

    assert_eq!(store.toggle_mastered("Diligent").unwrap(), None);
    assert_eq!(store.toggle_mastered("agenda").unwrap(), None);
    assert!(!store.word_bank()[0].is_mastered);
}

#[test]
fn accepted_clear_empties_collection() {
    let mut store = CourseStore::new(MemoryStore::new());
    store.add_word(word("diligent")).unwrap();
    store.record_error(missed("q1", "A")).unwrap();

    let request = store.request_clear(Collection::WordBank);
    let outcome = store.resolve_clear(request, Confirmation::Accepted).unwrap();

    assert_eq!(outcome, ClearOutcome::Cleared(Collection::WordBank));
    assert!(store.word_bank().is_empty());
    assert_eq!(store.error_review().len(), 1);
}

#[test]
fn declined_clear_leaves_collection_untouched() {
    let mut store = CourseStore::new(MemoryStore::new());
    store.record_error(missed("q1", "A")).unwrap();

    let request = store.request_clear(Collection::ErrorReview);
    assert!(request.prompt().contains("error review"));
    let outcome = store.resolve_clear(request, false.into()).unwrap();

    assert_eq!(outcome, ClearOutcome::Kept(Collection::ErrorReview));
    assert_eq!(store.error_review().len(), 1);
}

#[test]
fn notes_are_scoped_per_lesson_and_field() {
    let mut store = CourseStore::new(MemoryStore::new());
    store.save_note("Video 1", NoteField::Who, "The project manager").unwrap();

    assert_eq!(store.load_note("Video 1", NoteField::Who).as_deref(), Some("The project manager"));
    assert_eq!(store.load_note("Video 1", NoteField::What), None);
    assert_eq!(store.load_note("Video 2", NoteField::Who), None);
    assert!(store.backend().get_item("5w1h-Video 1-who").unwrap().is_some());
}

/// Backend whose reads always fail, standing in for a blocked `localStorage`.
struct BrokenBackend;

impl KeyValueStore for BrokenBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read {
            key: key.to_string(),
            message: "access denied".to_string(),
        })
    }

    fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            message: "access denied".to_string(),
        })
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn unreadable_backend_reads_as_empty_but_mutations_fail() {
    let mut store = CourseStore::new(BrokenBackend);

    assert!(store.word_bank().is_empty());
    assert_eq!(store.load_note("Video 1", NoteField::Why), None);

    let err = store.add_word(word("diligent")).unwrap_err();
    assert!(matches!(err, StorageError::Read { .. }));
}

#[test]
fn boxed_backends_work_as_stores() {
    let backend: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
    let mut store = CourseStore::new(backend);
    assert!(store.add_word(word("agenda")).unwrap());
    assert_eq!(store.word_bank().len(), 1);
}
