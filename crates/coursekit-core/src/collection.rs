use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::keys;

/// The two persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Collection {
    WordBank,
    ErrorReview,
}

impl Collection {
    /// The fixed storage key the collection is serialized under.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::WordBank => keys::WORD_BANK,
            Collection::ErrorReview => keys::ERROR_REVIEW,
        }
    }

    /// Human-readable name used in prompts and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Collection::WordBank => "word bank",
            Collection::ErrorReview => "error review",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    /// Accepts either the storage key or the snake_case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            keys::WORD_BANK | "word_bank" => Ok(Collection::WordBank),
            keys::ERROR_REVIEW | "error_review" => Ok(Collection::ErrorReview),
            other => Err(CoreError::UnknownCollection(other.to_string())),
        }
    }
}
