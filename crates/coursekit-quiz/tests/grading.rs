use coursekit_core::lesson::LessonContext;
use coursekit_quiz::grading::{grade, Verdict, NO_CORRECT_OPTION, NO_SELECTION};
use coursekit_quiz::question::{AnswerOption, Question, QuestionKind};

fn graded_at() -> jiff::Timestamp {
    "2025-04-02T10:15:00Z".parse().unwrap()
}

fn option(value: &str, is_correct: bool, selected: bool) -> AnswerOption {
    AnswerOption {
        value: value.to_string(),
        is_correct,
        selected,
    }
}

/// Three-option multiple choice question with "B" correct.
fn choice(id: &str, selected: Option<&str>) -> Question {
    Question {
        id: id.to_string(),
        prompt: format!("Question {id}"),
        kind: QuestionKind::MultipleChoice,
        options: ["A", "B", "C"]
            .into_iter()
            .map(|v| option(v, v == "B", Some(v) == selected))
            .collect(),
    }
}

fn short_answer(id: &str) -> Question {
    Question {
        id: id.to_string(),
        prompt: "Explain in your own words.".to_string(),
        kind: QuestionKind::ShortAnswer,
        options: Vec::new(),
    }
}

#[test]
fn all_correct_selections_give_full_score() {
    let questions = vec![choice("q1", Some("B")), choice("q2", Some("B")), choice("q3", Some("B"))];
    let report = grade(&questions, &LessonContext::from("Video 1"), graded_at());

    assert_eq!(report.correct, 3);
    assert_eq!(report.total, 3);
    assert!(report.is_perfect());
    assert!(report.missed.is_empty());
    assert!(report.results.iter().all(|r| r.verdict == Verdict::Correct && r.highlight.is_none()));
}

#[test]
fn wrong_selection_is_recorded_with_both_answers() {
    let questions = vec![choice("q1", Some("A")), choice("q2", Some("B"))];
    let report = grade(&questions, &LessonContext::from("Video 1"), graded_at());

    assert_eq!(report.correct, 1);
    assert_eq!(report.total, 2);
    assert_eq!(report.results[0].verdict, Verdict::Incorrect);
    assert_eq!(report.results[0].highlight, Some(1));

    assert_eq!(report.missed.len(), 1);
    let missed = &report.missed[0];
    assert_eq!(missed.id, "q1");
    assert_eq!(missed.question, "Question q1");
    assert_eq!(missed.user_answer, "A");
    assert_eq!(missed.correct_answer, "B");
    assert_eq!(missed.source, "Video 1");
    assert_eq!(missed.date_recorded, graded_at());
}

#[test]
fn unanswered_question_counts_but_is_not_recorded() {
    let questions = vec![choice("q1", None)];
    let report = grade(&questions, &LessonContext::default(), graded_at());

    assert_eq!(report.correct, 0);
    assert_eq!(report.total, 1);
    assert!(report.missed.is_empty());

    let result = &report.results[0];
    assert_eq!(result.verdict, Verdict::Unanswered);
    assert_eq!(result.user_answer, NO_SELECTION);
    assert_eq!(result.highlight, Some(1));
}

#[test]
fn short_answer_questions_are_not_graded() {
    let questions = vec![choice("q1", Some("B")), short_answer("q5")];
    let report = grade(&questions, &LessonContext::from("Video 1"), graded_at());

    assert_eq!(report.total, 1);
    assert_eq!(report.correct, 1);
    assert_eq!(report.results[1].verdict, Verdict::Ungraded);
    assert!(report.missed.is_empty());
}

#[test]
fn question_without_flagged_option_reports_placeholder() {
    let question = Question {
        id: "q9".to_string(),
        prompt: "Pick one".to_string(),
        kind: QuestionKind::TrueFalse,
        options: vec![option("True", false, true), option("False", false, false)],
    };
    let report = grade(&[question], &LessonContext::default(), graded_at());

    assert_eq!(report.results[0].verdict, Verdict::Incorrect);
    assert_eq!(report.results[0].highlight, None);
    assert_eq!(report.missed[0].correct_answer, NO_CORRECT_OPTION);
    assert_eq!(report.missed[0].source, "Unknown Source");
}

#[test]
fn kind_is_read_from_data_type_attribute() {
    assert_eq!(QuestionKind::from_attr(Some("short-answer")), QuestionKind::ShortAnswer);
    assert_eq!(QuestionKind::from_attr(Some("true-false")), QuestionKind::TrueFalse);
    assert_eq!(QuestionKind::from_attr(Some("multiple-choice")), QuestionKind::MultipleChoice);
    assert_eq!(QuestionKind::from_attr(None), QuestionKind::MultipleChoice);
    assert!(!QuestionKind::ShortAnswer.is_auto_graded());
}

#[test]
fn empty_page_grades_to_zero_of_zero() {
    let report = grade(&[], &LessonContext::default(), graded_at());
    assert_eq!((report.correct, report.total), (0, 0));
    assert!(report.results.is_empty());
}
