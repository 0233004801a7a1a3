//! Small helpers over `web-sys` element access.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList};

use crate::error::WebError;

/// Every element in a node list, skipping non-element nodes.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn select_all(root: &Element, selector: &str) -> Result<Vec<Element>, WebError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

pub fn select_all_in_document(document: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Current value of an `<input>` or `<textarea>`.
pub fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

pub fn set_field_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Value of the form field with the given id, if the page has one.
pub fn field_value_by_id(document: &Document, id: &str) -> Option<String> {
    document.get_element_by_id(id).and_then(|el| field_value(&el))
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), WebError> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| WebError::ElementType(element.id()))?;
    html.style().set_property(property, value)?;
    Ok(())
}

pub fn data(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{name}"))
}
