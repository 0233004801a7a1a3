//! Learner-facing text.

use coursekit_core::collection::Collection;

pub const ADDED_BUTTON_LABEL: &str = "Added ✅";

pub const FEEDBACK_CORRECT: &str = "Correct! 🎉";

pub const FEEDBACK_INCORRECT: &str = "Incorrect. The correct answer is highlighted below.";

pub const FEEDBACK_CORRECT_COLOR: &str = "green";

pub const FEEDBACK_INCORRECT_COLOR: &str = "red";

pub const HIGHLIGHT_BACKGROUND: &str = "rgba(138, 43, 226, 0.1)";

pub const STORAGE_FAILED: &str =
    "Sorry, your progress could not be saved in this browser. Please check your privacy settings.";

pub fn word_added(word: &str) -> String {
    format!("\"{word}\" has been added to your word bank!")
}

pub fn word_already_saved(word: &str) -> String {
    format!("\"{word}\" is already in your word bank.")
}

pub fn quiz_summary(correct: usize, total: usize) -> String {
    format!("Quiz complete! You answered {correct} out of {total} questions correctly.")
}

pub fn notes_downloaded(filename: &str) -> String {
    format!("Your notes have been downloaded as {filename}!")
}

pub fn collection_cleared(collection: Collection) -> &'static str {
    match collection {
        Collection::WordBank => "Your word bank has been cleared!",
        Collection::ErrorReview => "All error review records have been cleared!",
    }
}
