//! DOM wiring. Reads inputs out of the host page, calls the controller,
//! and applies what it returns.

pub mod dom;
pub mod lesson;
pub mod lists;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Window};

use coursekit_core::lesson::LessonContext;
use coursekit_storage::store::CourseStore;

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::controller::PageKind;
use crate::error::WebError;
use crate::local_storage::PageStorage;
use crate::messages;

/// Everything the event handlers on one page share.
pub struct App {
    pub window: Window,
    pub document: Document,
    pub config: PageConfig,
    pub lesson: LessonContext,
    pub kind: PageKind,
    pub store: RefCell<CourseStore<PageStorage>>,
}

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

impl App {
    fn load() -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;

        let config = load_config(&document);
        crate::logging::init(&config.log_level);

        let lesson = document
            .query_selector("main")?
            .and_then(|main| dom::data(&main, "lesson-id"));
        let lesson = LessonContext::new(lesson);

        let kind = PageKind::from_path(&window.location().pathname()?);
        let storage = PageStorage::detect(&window);
        tracing::info!(
            page = ?kind,
            lesson = lesson.source(),
            persistent = storage.is_persistent(),
            "page loaded"
        );

        Ok(Self {
            window,
            document,
            config,
            lesson,
            kind,
            store: RefCell::new(CourseStore::new(storage)),
        })
    }

    pub fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!(error = %WebError::from(e), "alert failed");
        }
    }

    pub fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    /// Show `message` after `delay_ms`, letting pending repaints land first.
    pub fn alert_later(&self, message: String, delay_ms: u32) {
        let window = self.window.clone();
        let callback = Closure::once_into_js(move || {
            if let Err(e) = window.alert_with_message(&message) {
                tracing::warn!(error = %WebError::from(e), "deferred alert failed");
            }
        });
        let scheduled = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            );
        if let Err(e) = scheduled {
            tracing::warn!(error = %WebError::from(e), "could not schedule alert");
        }
    }

    /// Log a storage failure and tell the learner their change was not kept.
    pub fn report_storage_failure(&self, error: &WebError) {
        tracing::error!(error = %error, "storage operation failed");
        self.alert(messages::STORAGE_FAILED);
    }
}

fn load_config(document: &Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };

    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not installed yet; the console is the only channel.
            web_sys::console::warn_1(&format!("coursekit: ignoring page config: {e}").into());
            PageConfig::default()
        }
    }
}

/// Attach `handler` to `event` on `target`. The closure lives as long as
/// the page.
pub fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Build the page state and wire everything the page has elements for.
pub fn boot() -> Result<(), WebError> {
    let app = Rc::new(App::load()?);
    APP.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&app)));

    lesson::wire(&app)?;
    lists::wire(&app)?;
    Ok(())
}

/// The booted page state, booting first if needed.
pub fn current() -> Result<Rc<App>, WebError> {
    if let Some(app) = APP.with(|slot| slot.borrow().clone()) {
        return Ok(app);
    }
    boot()?;
    APP.with(|slot| slot.borrow().clone()).ok_or(WebError::NoDocument)
}
