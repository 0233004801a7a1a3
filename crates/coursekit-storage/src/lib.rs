//! coursekit-storage
//!
//! Persistence for the word bank, the error review, and per-lesson notes.
//! Thin layer over a string-keyed key/value backend; every mutation
//! rewrites the whole serialized collection.

pub mod backend;
pub mod clear;
pub mod error;
pub mod memory;
pub mod store;
