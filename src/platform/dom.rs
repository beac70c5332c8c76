//! Thin helpers over `web_sys` lookups

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

/// Render a thrown JS value as a message
pub fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "no global window".to_string())
}

pub fn document(window: &Window) -> Result<Document, String> {
    window.document().ok_or_else(|| "window has no document".to_string())
}

pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, String> {
    document.query_selector(selector).map_err(js_error)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, String> {
    document
        .query_selector_all(selector)
        .map(elements)
        .map_err(js_error)
}

pub fn query_within(root: &Element, selector: &str) -> Result<Vec<Element>, String> {
    root.query_selector_all(selector)
        .map(elements)
        .map_err(js_error)
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set an inline style property; a no-op on non-HTML (e.g. SVG) elements
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), String> {
    match element.dyn_ref::<HtmlElement>() {
        Some(html) => html.style().set_property(property, value).map_err(js_error),
        None => Ok(()),
    }
}
