// ============================================================================
// SELLWELL PORTAL - pure Rust WASM frontend, strict MVVM
// ============================================================================
// - views: build DOM, no business logic
// - viewmodels: UI logic + session lifecycle, host-testable
// - services: HTTP only
// - state: shared Rc<RefCell> state with change notifications
// - models: wire structs shared with the backend
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;

// Single App instance, owned by the module so event-driven re-renders
// can reach it
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 SellWell portal starting");

    let app = App::new()?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the mounted app, invoked by state subscribers
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Render failed: {:?}", e);
            }
        }
    });
}
