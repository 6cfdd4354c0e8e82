// ============================================================================
// ELEMENT BUILDER - declarative-ish element construction
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::element::{append_child, create_element, set_text_content};

/// Small builder so views read as a tree instead of a wall of
/// `create_element`/`append_child` pairs.
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        self.element.set_attribute(name, value)?;
        Ok(self)
    }

    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    pub fn build(self) -> Element {
        self.element
    }
}

/// Shorthand for the very common leaf: `<tag class="..">text</tag>`
pub fn el(tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let element = create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    if !text.is_empty() {
        set_text_content(&element, text);
    }
    Ok(element)
}

/// `<a href="#/...">` used by every nav link
pub fn link(href: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let anchor = el("a", class, text)?;
    anchor.set_attribute("href", href)?;
    Ok(anchor)
}
