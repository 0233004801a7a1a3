//! coursekit-export
//!
//! Pure data-to-text rendering: the downloadable notes document and the
//! markup for the word-bank and error-review list pages. Attaching the
//! output to a page is the caller's job.

pub mod error;
pub mod lists;
pub mod notes;
pub mod render;
mod templates;
