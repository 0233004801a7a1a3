//! Storage key conventions.
//!
//! Pure string functions. These define the canonical layout of the
//! origin-scoped key/value store. Changing any of them orphans data that
//! learners already have in their browsers.

use crate::models::notes::NoteField;

pub const WORD_BANK: &str = "wordBank";

pub const ERROR_REVIEW: &str = "errorReview";

pub fn note(lesson_id: &str, field: NoteField) -> String {
    format!("5w1h-{lesson_id}-{field}")
}
