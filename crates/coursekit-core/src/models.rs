pub mod notes;
pub mod review;
pub mod word;
