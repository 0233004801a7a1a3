//! coursekit-web
//!
//! WebAssembly entry point for the course site. On load it reads the page
//! config and lesson id, picks a storage backend, and wires whatever
//! features the page has elements for. Page logic lives in [`controller`]
//! so it can be tested natively; [`page`] is the DOM glue.

pub mod config;
pub mod controller;
pub mod error;
pub mod local_storage;
pub mod logging;
pub mod messages;
pub mod page;

use wasm_bindgen::prelude::*;

use coursekit_core::collection::Collection;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    page::boot()?;
    Ok(())
}

/// Clear the word bank after asking the learner. Callable from host pages.
#[wasm_bindgen(js_name = clearWordBank)]
pub fn clear_word_bank() -> Result<(), JsValue> {
    let app = page::current()?;
    page::lists::clear(&app, Collection::WordBank)?;
    Ok(())
}

/// Clear the error review after asking the learner. Callable from host pages.
#[wasm_bindgen(js_name = clearErrorReview)]
pub fn clear_error_review() -> Result<(), JsValue> {
    let app = page::current()?;
    page::lists::clear(&app, Collection::ErrorReview)?;
    Ok(())
}
