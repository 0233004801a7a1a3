use coursekit_core::models::review::ErrorEntry;
use coursekit_core::models::word::WordEntry;
use coursekit_export::lists::{
    render_error_review, render_word_bank, EMPTY_ERROR_REVIEW, EMPTY_WORD_BANK,
};

fn word(w: &str, mastered: bool) -> WordEntry {
    let mut entry = WordEntry::new(
        w,
        "adj",
        "hard-working",
        "She is diligent.",
        "Video 1",
        "2025-03-01T08:00:00Z".parse().unwrap(),
    );
    entry.is_mastered = mastered;
    entry
}

#[test]
fn empty_word_bank_shows_placeholder() {
    let html = render_word_bank(&[]).unwrap();
    assert!(html.contains("empty-state"));
    assert!(html.contains("Your word bank is empty."));
    assert!(!html.contains("word-item"));
    assert!(!EMPTY_WORD_BANK.is_empty());
}

#[test]
fn word_items_carry_mastery_toggle() {
    let html = render_word_bank(&[word("diligent", false), word("agenda", true)]).unwrap();

    assert_eq!(html.matches("class=\"word-item\"").count(), 2);
    assert!(html.contains("id=\"word-0\""));
    assert!(html.contains("id=\"word-1\""));
    assert!(html.contains("data-word=\"diligent\">"));
    assert!(html.contains("data-word=\"agenda\" checked>"));
    assert!(html.contains("<strong>diligent</strong> (adj) - hard-working"));
    assert!(html.contains("Source: Video 1"));
}

#[test]
fn rendering_is_idempotent() {
    let words = [word("diligent", false)];
    assert_eq!(render_word_bank(&words).unwrap(), render_word_bank(&words).unwrap());
}

#[test]
fn stored_text_is_escaped() {
    let mut entry = word("<b>bold</b>", false);
    entry.example = "Say \"hi\" & leave".to_string();
    let html = render_word_bank(&[entry]).unwrap();

    assert!(!html.contains("<b>bold</b>"));
    assert!(html.contains("&lt;b&gt;bold&lt;"));
    assert!(html.contains("Say &quot;hi&quot; &amp; leave"));
}

#[test]
fn empty_error_review_shows_placeholder() {
    let html = render_error_review(&[]).unwrap();
    assert!(html.contains(EMPTY_ERROR_REVIEW));
    assert!(!html.contains("error-item"));
}

#[test]
fn error_items_show_both_answers_and_date() {
    let entry = ErrorEntry {
        id: "q2".to_string(),
        question: "What is the main idea?".to_string(),
        user_answer: "Speed".to_string(),
        correct_answer: "Consistency".to_string(),
        source: "Video 1".to_string(),
        date_recorded: "2025-02-11T12:00:00Z".parse().unwrap(),
    };
    let html = render_error_review(&[entry]).unwrap();

    assert!(html.contains("<h4>Video 1: What is the main idea?</h4>"));
    assert!(html.contains("Your answer: Speed"));
    assert!(html.contains("Correct answer: Consistency"));
    assert!(html.contains("Recorded on: 2025-02-11"));
}
