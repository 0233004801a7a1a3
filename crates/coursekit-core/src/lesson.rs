//! Lesson identifier helpers.
//!
//! Lesson pages carry their identifier in `data-lesson-id` on `<main>`.
//! Pages without one still work, with fixed fallbacks depending on where
//! the identifier ends up.

/// Source label stored on entries collected from a page without an id.
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Title used for exported notes from a page without an id.
pub const UNTITLED_RECORD: &str = "Lesson_Record";

/// The lesson a page belongs to, as read from the host page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonContext {
    id: Option<String>,
}

impl LessonContext {
    /// Blank identifiers are treated as missing.
    pub fn new(id: Option<String>) -> Self {
        let id = id.filter(|s| !s.trim().is_empty());
        Self { id }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Label recorded as `source` on word and error entries.
    pub fn source(&self) -> &str {
        self.id.as_deref().unwrap_or(UNKNOWN_SOURCE)
    }

    /// Identifier used in the notes header, filename, and note storage keys.
    pub fn record_title(&self) -> &str {
        self.id.as_deref().unwrap_or(UNTITLED_RECORD)
    }
}

/// Replace every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize_lesson_id(lesson_id: &str) -> String {
    lesson_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

impl From<&str> for LessonContext {
    fn from(id: &str) -> Self {
        Self::new(Some(id.to_string()))
    }
}
