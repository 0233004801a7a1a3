use serde::{Deserialize, Serialize};
use tracing::debug;

use coursekit_core::lesson::LessonContext;
use coursekit_core::models::review::ErrorEntry;

use crate::question::Question;

/// Shown as the learner's answer when nothing was selected.
pub const NO_SELECTION: &str = "No answer selected";

/// Shown as the correct answer when the page flags no option as correct.
pub const NO_CORRECT_OPTION: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect,
    Unanswered,
    /// Free-text question, excluded from scoring.
    Ungraded,
}

/// Outcome for a single question, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub verdict: Verdict,
    /// Position of the option to highlight for incorrect or unanswered questions.
    pub highlight: Option<usize>,
    pub user_answer: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizReport {
    pub results: Vec<QuestionResult>,
    pub correct: usize,
    /// Number of auto-graded questions.
    pub total: usize,
    /// Wrongly answered questions to record in the error review.
    pub missed: Vec<ErrorEntry>,
}

impl QuizReport {
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

/// Grade every question on a page.
///
/// A question is correct when its selected option is flagged correct.
/// Only questions with a selection that turned out wrong produce an
/// [`ErrorEntry`]; unanswered and free-text questions never do.
pub fn grade(questions: &[Question], lesson: &LessonContext, graded_at: jiff::Timestamp) -> QuizReport {
    let mut results = Vec::with_capacity(questions.len());
    let mut missed = Vec::new();
    let mut correct = 0;
    let mut total = 0;

    for question in questions {
        let correct_option = question.correct_option();
        let correct_answer = correct_option
            .map(|(_, o)| o.value.clone())
            .unwrap_or_else(|| NO_CORRECT_OPTION.to_string());
        let selection = question.selection();
        let user_answer = selection
            .map(|(_, o)| o.value.clone())
            .unwrap_or_else(|| NO_SELECTION.to_string());

        if !question.kind.is_auto_graded() {
            results.push(QuestionResult {
                question_id: question.id.clone(),
                verdict: Verdict::Ungraded,
                highlight: None,
                user_answer,
                correct_answer,
            });
            continue;
        }

        total += 1;
        let highlight = correct_option.map(|(i, _)| i);

        let verdict = match selection {
            Some((_, option)) if option.is_correct => {
                correct += 1;
                Verdict::Correct
            }
            Some(_) => {
                missed.push(ErrorEntry {
                    id: question.id.clone(),
                    question: question.prompt.clone(),
                    user_answer: user_answer.clone(),
                    correct_answer: correct_answer.clone(),
                    source: lesson.source().to_string(),
                    date_recorded: graded_at,
                });
                Verdict::Incorrect
            }
            None => Verdict::Unanswered,
        };

        debug!(id = %question.id, ?verdict, "question graded");
        results.push(QuestionResult {
            question_id: question.id.clone(),
            verdict,
            highlight: if verdict == Verdict::Correct { None } else { highlight },
            user_answer,
            correct_answer,
        });
    }

    QuizReport {
        results,
        correct,
        total,
        missed,
    }
}
