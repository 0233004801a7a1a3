//! Page logic independent of the DOM.
//!
//! The `page` module reads inputs out of the document, calls into here, and
//! applies the returned outcome (button state, feedback, alerts, markup).
//! Everything in this module runs natively, so it is tested without a
//! browser.

use tracing::{info, warn};

use coursekit_core::collection::Collection;
use coursekit_core::lesson::LessonContext;
use coursekit_core::models::notes::NoteField;
use coursekit_core::models::word::WordEntry;
use coursekit_export::error::ExportError;
use coursekit_export::lists::{render_error_review, render_word_bank};
use coursekit_export::notes::{notes_filename, render_notes, NoteSheet, ShortAnswerPrompt};
use coursekit_quiz::grading::{grade, QuizReport, Verdict};
use coursekit_quiz::question::Question;
use coursekit_storage::backend::KeyValueStore;
use coursekit_storage::clear::{ClearOutcome, ClearRequest, Confirmation};
use coursekit_storage::error::StorageError;
use coursekit_storage::store::CourseStore;

use crate::messages;

/// Which site page is loaded, decided from the URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Lesson,
    WordBank,
    ErrorReview,
}

impl PageKind {
    pub fn from_path(path: &str) -> Self {
        if path.contains("vocabulary.html") {
            PageKind::WordBank
        } else if path.contains("errors.html") {
            PageKind::ErrorReview
        } else {
            PageKind::Lesson
        }
    }

    /// Element id of the list region on list pages.
    pub fn list_region_id(&self) -> Option<&'static str> {
        match self {
            PageKind::Lesson => None,
            PageKind::WordBank => Some("word-bank-list"),
            PageKind::ErrorReview => Some("error-review-list"),
        }
    }

    pub fn collection(&self) -> Option<Collection> {
        match self {
            PageKind::Lesson => None,
            PageKind::WordBank => Some(Collection::WordBank),
            PageKind::ErrorReview => Some(Collection::ErrorReview),
        }
    }
}

/// Word details carried in an add-word button's data attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCandidate {
    pub word: Option<String>,
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddWordOutcome {
    Added(String),
    AlreadySaved(String),
    /// The button has no `data-word`; nothing to do.
    NoWord,
}

impl AddWordOutcome {
    pub fn message(&self) -> Option<String> {
        match self {
            AddWordOutcome::Added(word) => Some(messages::word_added(word)),
            AddWordOutcome::AlreadySaved(word) => Some(messages::word_already_saved(word)),
            AddWordOutcome::NoWord => None,
        }
    }
}

pub fn add_word<S: KeyValueStore>(
    store: &mut CourseStore<S>,
    candidate: WordCandidate,
    lesson: &LessonContext,
    now: jiff::Timestamp,
) -> Result<AddWordOutcome, StorageError> {
    let Some(word) = candidate.word.filter(|w| !w.trim().is_empty()) else {
        return Ok(AddWordOutcome::NoWord);
    };

    let entry = WordEntry::new(
        word.clone(),
        candidate.part_of_speech,
        candidate.definition,
        candidate.example,
        lesson.source(),
        now,
    );

    if store.add_word(entry)? {
        Ok(AddWordOutcome::Added(word))
    } else {
        Ok(AddWordOutcome::AlreadySaved(word))
    }
}

/// Feedback line shown under a graded question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub text: &'static str,
    pub color: &'static str,
}

impl Feedback {
    pub fn for_verdict(verdict: Verdict) -> Option<Self> {
        match verdict {
            Verdict::Correct => Some(Feedback {
                text: messages::FEEDBACK_CORRECT,
                color: messages::FEEDBACK_CORRECT_COLOR,
            }),
            Verdict::Incorrect | Verdict::Unanswered => Some(Feedback {
                text: messages::FEEDBACK_INCORRECT,
                color: messages::FEEDBACK_INCORRECT_COLOR,
            }),
            Verdict::Ungraded => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizCheck {
    pub report: QuizReport,
    pub summary: String,
}

/// Grade the page's questions and record every wrong selection.
///
/// Recording is best effort: a storage failure is logged and the remaining
/// questions are still graded and reported.
pub fn check_quiz<S: KeyValueStore>(
    store: &mut CourseStore<S>,
    questions: &[Question],
    lesson: &LessonContext,
    now: jiff::Timestamp,
) -> QuizCheck {
    let report = grade(questions, lesson, now);

    for entry in &report.missed {
        if let Err(e) = store.record_error(entry.clone()) {
            warn!(id = %entry.id, error = %e, "failed to record missed question");
        }
    }

    info!(
        correct = report.correct,
        total = report.total,
        missed = report.missed.len(),
        lesson = lesson.source(),
        "quiz checked"
    );

    let summary = messages::quiz_summary(report.correct, report.total);
    QuizCheck { report, summary }
}

pub fn toggle_mastered<S: KeyValueStore>(
    store: &mut CourseStore<S>,
    word: &str,
) -> Result<Option<bool>, StorageError> {
    store.toggle_mastered(word)
}

/// First step of clearing a collection: the prompt to show the learner.
pub fn request_clear<S: KeyValueStore>(store: &CourseStore<S>, collection: Collection) -> ClearRequest {
    store.request_clear(collection)
}

/// Second step: apply the learner's answer. Returns the message to show
/// when something was cleared.
pub fn confirm_clear<S: KeyValueStore>(
    store: &mut CourseStore<S>,
    request: ClearRequest,
    confirmation: Confirmation,
) -> Result<Option<&'static str>, StorageError> {
    match store.resolve_clear(request, confirmation)? {
        ClearOutcome::Cleared(collection) => Ok(Some(messages::collection_cleared(collection))),
        ClearOutcome::Kept(_) => Ok(None),
    }
}

/// Markup for a list page's display region, or `None` on lesson pages.
pub fn render_page<S: KeyValueStore>(
    store: &CourseStore<S>,
    kind: PageKind,
) -> Result<Option<String>, ExportError> {
    match kind {
        PageKind::Lesson => Ok(None),
        PageKind::WordBank => render_word_bank(&store.word_bank()).map(Some),
        PageKind::ErrorReview => render_error_review(&store.error_review()).map(Some),
    }
}

/// A rendered notes document ready to hand to the browser as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesExport {
    pub filename: String,
    pub body: String,
}

impl NotesExport {
    pub fn message(&self) -> String {
        messages::notes_downloaded(&self.filename)
    }
}

pub fn export_notes<S: KeyValueStore>(
    store: &CourseStore<S>,
    lesson: &LessonContext,
    now: jiff::Timestamp,
    on_page: impl Fn(NoteField) -> Option<String>,
    prompt: &ShortAnswerPrompt,
    short_answer: Option<String>,
) -> Result<NotesExport, ExportError> {
    let lesson_key = lesson.record_title();
    let sheet = NoteSheet::collect(
        lesson,
        now,
        on_page,
        |field| store.load_note(lesson_key, field),
        prompt,
        short_answer,
    );

    let body = render_notes(&sheet)?;
    let filename = notes_filename(lesson);
    info!(filename = %filename, "notes exported");
    Ok(NotesExport { filename, body })
}

/// Persist one note field as the learner types.
pub fn save_note<S: KeyValueStore>(
    store: &mut CourseStore<S>,
    lesson: &LessonContext,
    field: NoteField,
    value: &str,
) -> Result<(), StorageError> {
    store.save_note(lesson.record_title(), field, value)
}

/// Saved values for the note fields that are blank on the page.
pub fn notes_to_restore<S: KeyValueStore>(
    store: &CourseStore<S>,
    lesson: &LessonContext,
    on_page: impl Fn(NoteField) -> Option<String>,
) -> Vec<(NoteField, String)> {
    NoteField::ALL
        .into_iter()
        .filter(|field| on_page(*field).is_none_or(|v| v.trim().is_empty()))
        .filter_map(|field| {
            store
                .load_note(lesson.record_title(), field)
                .map(|value| (field, value))
        })
        .collect()
}
