// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners are registered with Closure::forget(). For element-local
// listeners that is safe: the browser drops them with the element when a
// view is cleared. Global listeners (hashchange) are registered exactly
// once at startup in app.rs.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

fn listen<E, F>(element: &Element, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::InputEvent) + 'static,
{
    listen(element, "input", handler)
}

pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    listen(element, "change", handler)
}

/// Form submit; the handler is expected to call `prevent_default`
pub fn on_submit<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    listen(element, "submit", handler)
}
