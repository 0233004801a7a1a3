//! coursekit-quiz
//!
//! Comprehension-check questions as read from a lesson page, and the grader
//! that scores them. Pure data with no storage or DOM access. The caller
//! persists the missed questions and renders the feedback.

pub mod grading;
pub mod question;
