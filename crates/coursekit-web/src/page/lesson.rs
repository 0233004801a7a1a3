//! Lesson page features: add-word buttons, the quiz check button, and the
//! 5W1H notes (restore, auto-save, download).

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    Blob, BlobPropertyBag, Element, HtmlAnchorElement, HtmlButtonElement, HtmlInputElement, Url,
};

use coursekit_core::models::notes::NoteField;
use coursekit_quiz::grading::QuizReport;
use coursekit_quiz::question::{AnswerOption, Question, QuestionKind};

use crate::controller::{self, AddWordOutcome, Feedback, NotesExport, WordCandidate};
use crate::error::WebError;
use crate::messages;
use crate::page::{App, dom, listen};

pub fn wire(app: &Rc<App>) -> Result<(), WebError> {
    wire_vocabulary_buttons(app)?;
    wire_quiz(app)?;
    wire_notes(app)?;
    Ok(())
}

fn wire_vocabulary_buttons(app: &Rc<App>) -> Result<(), WebError> {
    for button in dom::select_all_in_document(&app.document, ".btn-add-word")? {
        let app = Rc::clone(app);
        let target = button.clone();
        listen(&button, "click", move |_| on_add_word(&app, &target))?;
    }
    Ok(())
}

fn on_add_word(app: &App, button: &Element) {
    let candidate = WordCandidate {
        word: dom::data(button, "word"),
        part_of_speech: dom::data(button, "pos").unwrap_or_default(),
        definition: dom::data(button, "definition").unwrap_or_default(),
        example: dom::data(button, "example").unwrap_or_default(),
    };

    let outcome = controller::add_word(
        &mut *app.store.borrow_mut(),
        candidate,
        &app.lesson,
        jiff::Timestamp::now(),
    );

    match outcome {
        Ok(outcome @ AddWordOutcome::Added(_)) => {
            button.set_text_content(Some(messages::ADDED_BUTTON_LABEL));
            if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
                button.set_disabled(true);
            }
            if let Some(message) = outcome.message() {
                app.alert_later(message, app.config.confirm_delay_ms);
            }
        }
        Ok(outcome) => {
            if let Some(message) = outcome.message() {
                app.alert(&message);
            }
        }
        Err(e) => app.report_storage_failure(&e.into()),
    }
}

fn wire_quiz(app: &Rc<App>) -> Result<(), WebError> {
    let Some(button) = app.document.get_element_by_id("check-answers") else {
        return Ok(());
    };
    let app = Rc::clone(app);
    listen(&button, "click", move |_| {
        if let Err(e) = on_check_answers(&app) {
            tracing::error!(error = %e, "quiz check failed");
        }
    })
}

/// One question container with the elements grading feedback touches.
struct QuestionView {
    container: Element,
    inputs: Vec<HtmlInputElement>,
    question: Question,
}

fn read_question(container: Element) -> Result<QuestionView, WebError> {
    let prompt = container
        .query_selector("p")?
        .and_then(|p| p.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default();
    let kind = QuestionKind::from_attr(dom::data(&container, "type").as_deref());

    let inputs: Vec<HtmlInputElement> = dom::select_all(&container, "input")?
        .into_iter()
        .filter_map(|el| el.dyn_into().ok())
        .collect();
    let options = inputs
        .iter()
        .map(|input| AnswerOption {
            value: input.value(),
            is_correct: input.get_attribute("data-correct").as_deref() == Some("true"),
            selected: input.checked(),
        })
        .collect();

    let question = Question {
        id: container.id(),
        prompt,
        kind,
        options,
    };
    Ok(QuestionView {
        container,
        inputs,
        question,
    })
}

fn on_check_answers(app: &App) -> Result<(), WebError> {
    let views = dom::select_all_in_document(&app.document, ".question")?
        .into_iter()
        .map(read_question)
        .collect::<Result<Vec<_>, _>>()?;
    let questions: Vec<Question> = views.iter().map(|v| v.question.clone()).collect();

    let check = controller::check_quiz(
        &mut *app.store.borrow_mut(),
        &questions,
        &app.lesson,
        jiff::Timestamp::now(),
    );

    show_feedback(&views, &check.report)?;
    app.alert(&check.summary);
    Ok(())
}

fn show_feedback(views: &[QuestionView], report: &QuizReport) -> Result<(), WebError> {
    for (view, result) in views.iter().zip(&report.results) {
        let Some(feedback) = Feedback::for_verdict(result.verdict) else {
            continue;
        };

        for label in dom::select_all(&view.container, "label")? {
            dom::set_style(&label, "background-color", "transparent")?;
        }

        if let Some(el) = view.container.query_selector(".feedback")? {
            el.set_text_content(Some(feedback.text));
            dom::set_style(&el, "color", feedback.color)?;
        }

        if let Some(input) = result.highlight.and_then(|i| view.inputs.get(i))
            && let Some(label) = input.closest("label")?
        {
            dom::set_style(&label, "background-color", messages::HIGHLIGHT_BACKGROUND)?;
        }
    }
    Ok(())
}

fn wire_notes(app: &Rc<App>) -> Result<(), WebError> {
    restore_notes(app);

    for field in NoteField::ALL {
        let Some(element) = app.document.get_element_by_id(field.as_str()) else {
            continue;
        };
        let app = Rc::clone(app);
        let target = element.clone();
        listen(&element, "input", move |_| {
            let value = dom::field_value(&target).unwrap_or_default();
            let saved = controller::save_note(&mut *app.store.borrow_mut(), &app.lesson, field, &value);
            if let Err(e) = saved {
                tracing::warn!(field = %field, error = %e, "note not saved");
            }
        })?;
    }

    if let Some(button) = app.document.get_element_by_id("download-notes") {
        let app = Rc::clone(app);
        listen(&button, "click", move |_| {
            if let Err(e) = on_download_notes(&app) {
                tracing::error!(error = %e, "notes download failed");
            }
        })?;
    }
    Ok(())
}

fn restore_notes(app: &App) {
    let document = &app.document;
    let restored = controller::notes_to_restore(&*app.store.borrow(), &app.lesson, |field| {
        dom::field_value_by_id(document, field.as_str())
    });

    for (field, value) in restored {
        if let Some(element) = document.get_element_by_id(field.as_str()) {
            dom::set_field_value(&element, &value);
        }
    }
}

fn on_download_notes(app: &App) -> Result<(), WebError> {
    let document = &app.document;
    let export = controller::export_notes(
        &*app.store.borrow(),
        &app.lesson,
        jiff::Timestamp::now(),
        |field| dom::field_value_by_id(document, field.as_str()),
        &app.config.short_answer.to_prompt(),
        dom::field_value_by_id(document, &app.config.short_answer.input_id),
    )?;

    download(app, &export)?;
    app.alert(&export.message());
    Ok(())
}

/// Hand the document to the browser as a file download via a temporary
/// object URL and a synthetic link click.
fn download(app: &App, export: &NotesExport) -> Result<(), WebError> {
    let parts = js_sys::Array::of1(&export.body.as_str().into());
    let options = BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = app
        .document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| WebError::ElementType("a".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(&export.filename);

    let body = app.document.body().ok_or(WebError::NoDocument)?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}
