use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the structured 5W1H note-taking fields on a lesson page.
///
/// The lowercase name doubles as the input element id and the suffix of the
/// per-lesson storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoteField {
    Who,
    What,
    When,
    Where,
    Why,
    How,
}

impl NoteField {
    /// All fields in export order.
    pub const ALL: [NoteField; 6] = [
        NoteField::Who,
        NoteField::What,
        NoteField::When,
        NoteField::Where,
        NoteField::Why,
        NoteField::How,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteField::Who => "who",
            NoteField::What => "what",
            NoteField::When => "when",
            NoteField::Where => "where",
            NoteField::Why => "why",
            NoteField::How => "how",
        }
    }
}

impl fmt::Display for NoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::UnknownNoteField(s.to_string()))
    }
}
