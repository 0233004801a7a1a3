//! Markup for the word-bank and error-review pages.
//!
//! Both renderers are idempotent: the output replaces the whole display
//! region. Stored text is HTML-escaped.

use serde::Serialize;

use coursekit_core::models::review::ErrorEntry;
use coursekit_core::models::word::WordEntry;

use crate::error::ExportError;
use crate::render::render_template;
use crate::templates;

pub const EMPTY_WORD_BANK: &str =
    "Your word bank is empty. Use the \"Add to Word Bank\" buttons on lesson pages to collect vocabulary!";

pub const EMPTY_ERROR_REVIEW: &str = "Great job! You have no recorded mistakes.";

#[derive(Serialize)]
struct WordRow<'a> {
    word: &'a str,
    part_of_speech: &'a str,
    definition: &'a str,
    example: &'a str,
    source: &'a str,
    mastered: bool,
}

#[derive(Serialize)]
struct WordBankView<'a> {
    words: Vec<WordRow<'a>>,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct ErrorRow<'a> {
    question: &'a str,
    user_answer: &'a str,
    correct_answer: &'a str,
    source: &'a str,
    recorded_on: String,
}

#[derive(Serialize)]
struct ErrorReviewView<'a> {
    errors: Vec<ErrorRow<'a>>,
    empty_message: &'static str,
}

/// One `.word-item` per entry, each with a mastery checkbox carrying the
/// word in `data-word`.
pub fn render_word_bank(words: &[WordEntry]) -> Result<String, ExportError> {
    let view = WordBankView {
        words: words
            .iter()
            .map(|w| WordRow {
                word: &w.word,
                part_of_speech: &w.part_of_speech,
                definition: &w.definition,
                example: &w.example,
                source: &w.source,
                mastered: w.is_mastered,
            })
            .collect(),
        empty_message: EMPTY_WORD_BANK,
    };
    render_template(templates::WORD_BANK_NAME, templates::WORD_BANK, &view)
}

pub fn render_error_review(errors: &[ErrorEntry]) -> Result<String, ExportError> {
    let view = ErrorReviewView {
        errors: errors
            .iter()
            .map(|e| ErrorRow {
                question: &e.question,
                user_answer: &e.user_answer,
                correct_answer: &e.correct_answer,
                source: &e.source,
                recorded_on: e.date_recorded.strftime("%Y-%m-%d").to_string(),
            })
            .collect(),
        empty_message: EMPTY_ERROR_REVIEW,
    };
    render_template(templates::ERROR_REVIEW_NAME, templates::ERROR_REVIEW, &view)
}
