use serde::{Deserialize, Serialize};

/// The `data-type` attribute value marking a free-text question.
pub const SHORT_ANSWER_ATTR: &str = "short-answer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    /// Free text. Never auto-graded and never recorded as an error.
    ShortAnswer,
}

impl QuestionKind {
    /// Interpret a question container's `data-type` attribute.
    /// Anything unrecognised, including a missing attribute, is multiple choice.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr.map(str::trim) {
            Some(SHORT_ANSWER_ATTR) => QuestionKind::ShortAnswer,
            Some("true-false") => QuestionKind::TrueFalse,
            _ => QuestionKind::MultipleChoice,
        }
    }

    pub fn is_auto_graded(&self) -> bool {
        !matches!(self, QuestionKind::ShortAnswer)
    }
}

/// One selectable answer inside a question container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: String,
    /// `data-correct="true"` on the input.
    pub is_correct: bool,
    pub selected: bool,
}

/// A question container on a lesson page, with the learner's current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Element id, used as the error-review key.
    pub id: String,
    pub prompt: String,
    pub kind: QuestionKind,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// The first selected option and its position.
    pub fn selection(&self) -> Option<(usize, &AnswerOption)> {
        self.options.iter().enumerate().find(|(_, o)| o.selected)
    }

    /// The first option flagged correct and its position.
    pub fn correct_option(&self) -> Option<(usize, &AnswerOption)> {
        self.options.iter().enumerate().find(|(_, o)| o.is_correct)
    }
}
