//! Confirmation-gated bulk clear.
//!
//! Clearing is a two-step command: [`ClearRequest`] names the collection and
//! the question to put to the learner, and only
//! [`CourseStore::resolve_clear`](crate::store::CourseStore::resolve_clear)
//! with [`Confirmation::Accepted`] removes anything.

use coursekit_core::collection::Collection;

/// The learner's answer to a clear prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(accepted: bool) -> Self {
        if accepted {
            Confirmation::Accepted
        } else {
            Confirmation::Declined
        }
    }
}

/// A pending request to empty one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a clear request does nothing until it is resolved"]
pub struct ClearRequest {
    collection: Collection,
}

impl ClearRequest {
    pub fn new(collection: Collection) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Confirmation question shown before anything is removed.
    pub fn prompt(&self) -> &'static str {
        match self.collection {
            Collection::WordBank => {
                "Are you sure you want to clear your entire word bank? This cannot be undone."
            }
            Collection::ErrorReview => {
                "Are you sure you want to clear all error review records? This cannot be undone."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The collection was removed from storage.
    Cleared(Collection),
    /// The learner declined; storage is untouched.
    Kept(Collection),
}
