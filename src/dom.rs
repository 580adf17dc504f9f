use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn body() -> Result<HtmlElement, SiteError> {
    document()?
        .body()
        .ok_or_else(|| SiteError::MissingElement("body".to_string()))
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::debug!("Failed to toggle class {}: {:?}", class, err);
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), SiteError> {
    let element = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| SiteError::MissingElement(format!("styled {}", element.tag_name())))?;
    element.style().set_property(property, value)?;
    Ok(())
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}
