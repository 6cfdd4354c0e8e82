// ============================================================================
// APP - root render loop and navigation
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{append_child, clear_children, get_element_by_id, scroll_to_top, window};
use crate::state::{AppState, Route};
use crate::viewmodels::SessionViewModel;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Route from the URL the page was opened with
        if let Some(win) = window() {
            if let Ok(hash) = win.location().hash() {
                state.set_route(Route::from_hash(&hash));
            }
        }

        // Session bootstrap, exactly once per page load
        {
            let state = state.clone();
            spawn_local(async move {
                SessionViewModel::new(state.session.clone()).bootstrap().await;
                state.notify_subscribers();
            });
        }

        // hashchange drives routing. Global listener, registered once
        // here, so forget() cannot accumulate registrations.
        {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |_event: web_sys::HashChangeEvent| {
                if let Some(win) = window() {
                    if let Ok(hash) = win.location().hash() {
                        let route = Route::from_hash(&hash);
                        log::debug!("[ROUTER] {} -> {:?}", hash, route);
                        state.set_route(route);
                        state.notify_subscribers();
                    }
                }
            }) as Box<dyn FnMut(web_sys::HashChangeEvent)>);
            window()
                .ok_or_else(|| JsValue::from_str("No window"))?
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Re-render on any state change, batched through a zero timeout
        // so a burst of changes paints once
        state.subscribe_to_changes(move || {
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self { state, root })
    }

    /// Full re-render of the current route
    pub fn render(&self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;
        scroll_to_top();
        Ok(())
    }
}

/// Navigate by hash. The hashchange listener picks it up and re-renders;
/// navigating to the current route is a no-op so guard redirects cannot
/// loop.
pub fn navigate(route: Route) {
    if let Some(win) = window() {
        let location = win.location();
        let current = location.hash().unwrap_or_default();
        if current != route.hash() {
            if let Err(e) = location.set_hash(route.hash()) {
                log::error!("❌ [ROUTER] Navigation failed: {:?}", e);
            }
        }
    }
}
