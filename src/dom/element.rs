// ============================================================================
// ELEMENT HELPERS - thin wrappers over web_sys DOM calls
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Drop every child. Listeners attached to the removed subtree are
/// cleaned up by the browser.
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

pub fn toggle_class(element: &Element, class: &str) -> Result<bool, JsValue> {
    element.class_list().toggle(class)
}

/// Current value of an `<input>` (or "" for a non-input element)
pub fn input_value(element: &Element) -> String {
    element
        .dyn_ref::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn set_input_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    }
}

pub fn set_disabled(element: &Element, disabled: bool) -> Result<(), JsValue> {
    if disabled {
        element.set_attribute("disabled", "disabled")
    } else {
        element.remove_attribute("disabled")
    }
}

/// Inline style assignment, used by the bar charts for widths
pub fn set_style(element: &Element, css: &str) -> Result<(), JsValue> {
    element.set_attribute("style", css)
}

/// Scroll back to the top after a route change
pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// `window.confirm` wrapper for destructive row actions
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
