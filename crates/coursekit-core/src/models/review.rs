use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A comprehension question the learner answered incorrectly.
///
/// Entries are keyed by `id` (the question's element id on the lesson page).
/// The same id is never recorded twice, even if it comes from a different
/// lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ErrorEntry {
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub user_answer: String,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub source: String,
    pub date_recorded: jiff::Timestamp,
}
