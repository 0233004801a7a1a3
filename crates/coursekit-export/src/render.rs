use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Render one of the crate's built-in templates.
///
/// The list markup (`word_bank.html`, `error_review.html`) is autoescaped
/// because of its extension. The notes sheet (`notes.txt`) goes into a
/// plain-text download and is left unescaped.
pub fn render_template<C: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &C,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}
