//! coursekit-core
//!
//! Pure domain types, storage key conventions, and lesson identifier helpers.
//! No browser dependency; this is the shared vocabulary of the course tools.

pub mod collection;
pub mod error;
pub mod keys;
pub mod lesson;
pub mod models;
