use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A vocabulary item the learner flagged for review.
///
/// `word` is the identity of the entry: the word bank never holds two
/// entries whose words compare equal ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WordEntry {
    pub word: String,
    /// Older pages omitted empty fields entirely, so every descriptive field
    /// defaults to empty when absent.
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: String,
    /// Lesson identifier the word was collected from (e.g. "Video 1").
    #[serde(default)]
    pub source: String,
    pub date_added: jiff::Timestamp,
    /// Absent in entries written before mastery tracking existed.
    #[serde(default)]
    pub is_mastered: bool,
}

impl WordEntry {
    pub fn new(
        word: impl Into<String>,
        part_of_speech: impl Into<String>,
        definition: impl Into<String>,
        example: impl Into<String>,
        source: impl Into<String>,
        date_added: jiff::Timestamp,
    ) -> Self {
        Self {
            word: word.into(),
            part_of_speech: part_of_speech.into(),
            definition: definition.into(),
            example: example.into(),
            source: source.into(),
            date_added,
            is_mastered: false,
        }
    }

    /// Case-insensitive identity comparison used for duplicate detection.
    pub fn same_word(&self, other: &str) -> bool {
        self.word.to_lowercase() == other.to_lowercase()
    }
}
