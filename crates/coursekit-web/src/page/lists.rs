//! Word-bank and error-review pages: render the stored collection, wire
//! mastery checkboxes, and handle the clear buttons.

use std::rc::Rc;

use coursekit_core::collection::Collection;
use coursekit_storage::clear::Confirmation;

use crate::controller::{self, PageKind};
use crate::error::WebError;
use crate::page::{App, dom, listen};

pub fn wire(app: &Rc<App>) -> Result<(), WebError> {
    render(app)?;

    for (id, collection) in [
        ("clear-word-bank", Collection::WordBank),
        ("clear-error-review", Collection::ErrorReview),
    ] {
        let Some(button) = app.document.get_element_by_id(id) else {
            continue;
        };
        let app = Rc::clone(app);
        listen(&button, "click", move |_| {
            if let Err(e) = clear(&app, collection) {
                tracing::error!(error = %e, "clear failed");
            }
        })?;
    }
    Ok(())
}

/// Replace the list region's contents with the current collection.
/// Does nothing on lesson pages or when the region is missing.
pub fn render(app: &Rc<App>) -> Result<(), WebError> {
    let Some(region_id) = app.kind.list_region_id() else {
        return Ok(());
    };
    let Some(region) = app.document.get_element_by_id(region_id) else {
        return Ok(());
    };

    let Some(markup) = controller::render_page(&*app.store.borrow(), app.kind)? else {
        return Ok(());
    };
    region.set_inner_html(&markup);

    if app.kind == PageKind::WordBank {
        for checkbox in dom::select_all(&region, ".mastery-toggle")? {
            let Some(word) = dom::data(&checkbox, "word") else {
                continue;
            };
            let app = Rc::clone(app);
            listen(&checkbox, "change", move |_| {
                let toggled = controller::toggle_mastered(&mut *app.store.borrow_mut(), &word);
                if let Err(e) = toggled {
                    app.report_storage_failure(&e.into());
                }
            })?;
        }
    }
    Ok(())
}

/// Ask the learner, then clear `collection` if they agree. Re-renders the
/// list when the current page shows the cleared collection.
pub fn clear(app: &Rc<App>, collection: Collection) -> Result<(), WebError> {
    let request = controller::request_clear(&*app.store.borrow(), collection);
    let confirmation = Confirmation::from(app.confirm(request.prompt()));

    let cleared = controller::confirm_clear(&mut *app.store.borrow_mut(), request, confirmation)?;
    let Some(message) = cleared else {
        return Ok(());
    };

    if app.kind.collection() == Some(collection) {
        render(app)?;
    }
    app.alert(message);
    Ok(())
}
