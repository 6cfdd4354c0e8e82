// ============================================================================
// APP VIEW - route guard + per-route dispatch
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{el, ElementBuilder};
use crate::state::{AppState, Route, SessionPhase};
use crate::views::admin::{overview, sales, upload, users};
use crate::views::shared::layout;
use crate::views::{home, login, products, signup};

/// Build the whole view for the current route. Protected routes render
/// nothing until the session resolves; unauthenticated visitors are
/// redirected to the login screen (the attempted URL is not preserved).
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = state.get_route();

    if !route.is_protected() {
        return match route {
            Route::Products => products::render_products(),
            Route::Login => login::render_login(state),
            Route::Signup => signup::render_signup(),
            _ => home::render_home(),
        };
    }

    match state.session.phase() {
        SessionPhase::Initializing => render_loading("LOADING"),
        SessionPhase::Anonymous => {
            log::info!("🔒 [GUARD] Not authenticated, redirecting to login");
            navigate(Route::Login);
            empty()
        }
        SessionPhase::Authenticated => {
            if route.superadmin_only() && !state.session.is_superadmin() {
                log::warn!("🔒 [GUARD] Superadmin route denied, redirecting to overview");
                navigate(Route::Dashboard);
                return empty();
            }
            let content = match route {
                Route::DashboardSales => sales::render_sales(state)?,
                Route::DashboardUsers => users::render_users(state)?,
                Route::DashboardUpload => upload::render_upload(state)?,
                _ => overview::render_overview(state)?,
            };
            layout::render_layout(state, content)
        }
    }
}

/// Spinner + label, also used by pages while their data loads
pub fn render_loading(label: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("loading-screen")
        .child(el("div", "spinner", "")?)?
        .child(el("p", "loading-label", label)?)
        .map(ElementBuilder::build)
}

fn empty() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.build())
}
