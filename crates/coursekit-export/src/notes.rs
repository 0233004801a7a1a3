use serde::{Deserialize, Serialize};
use tracing::debug;

use coursekit_core::lesson::{LessonContext, sanitize_lesson_id};
use coursekit_core::models::notes::NoteField;

use crate::error::ExportError;
use crate::render::render_template;
use crate::templates;

/// The free-text question whose answer is exported with the notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortAnswerPrompt {
    /// Short label printed before the prompt (e.g. "Q5").
    pub label: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteLine {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortAnswerBlock {
    pub label: String,
    pub prompt: String,
    pub answer: Option<String>,
}

/// Everything that goes into an exported notes document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSheet {
    pub lesson_id: String,
    pub generated_at: String,
    /// Always all six 5W1H fields, in [`NoteField::ALL`] order.
    pub fields: Vec<NoteLine>,
    pub short_answer: ShortAnswerBlock,
}

impl NoteSheet {
    /// Gather the notes for a lesson.
    ///
    /// Each field takes the value currently on the page; when that is
    /// missing or blank, the previously saved value is used instead.
    pub fn collect(
        lesson: &LessonContext,
        generated_at: jiff::Timestamp,
        on_page: impl Fn(NoteField) -> Option<String>,
        saved: impl Fn(NoteField) -> Option<String>,
        prompt: &ShortAnswerPrompt,
        answer: Option<String>,
    ) -> Self {
        let fields = NoteField::ALL
            .into_iter()
            .map(|field| {
                let value = non_blank(on_page(field))
                    .or_else(|| saved(field))
                    .unwrap_or_default();
                NoteLine {
                    name: field.as_str(),
                    value,
                }
            })
            .collect();

        Self {
            lesson_id: lesson.record_title().to_string(),
            generated_at: generated_at.strftime("%Y-%m-%d %H:%M:%S").to_string(),
            fields,
            short_answer: ShortAnswerBlock {
                label: prompt.label.clone(),
                prompt: prompt.prompt.clone(),
                answer: non_blank(answer),
            },
        }
    }
}

/// Render the plain-text notes document.
pub fn render_notes(sheet: &NoteSheet) -> Result<String, ExportError> {
    let text = render_template(templates::NOTES_NAME, templates::NOTES, sheet)?;
    debug!(lesson = %sheet.lesson_id, bytes = text.len(), "notes rendered");
    Ok(text)
}

/// Download filename for a lesson's notes: `<sanitized-lesson-id>_Notes.txt`.
pub fn notes_filename(lesson: &LessonContext) -> String {
    format!("{}_Notes.txt", sanitize_lesson_id(lesson.record_title()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
