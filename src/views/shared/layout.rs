// ============================================================================
// DASHBOARD LAYOUT - nav chrome around every admin page
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{el, link, on_click, toggle_class, ElementBuilder};
use crate::state::{AppState, Route};
use crate::viewmodels::{visible_entries, NavEntry, SessionViewModel};

/// Wrap page content in the dashboard chrome. Desktop bar and mobile
/// dropdown are both built from the same `visible_entries` call, so the
/// role filter cannot diverge between them.
pub fn render_layout(state: &AppState, content: Element) -> Result<Element, JsValue> {
    let user = state.session.get_user();
    let entries = visible_entries(user.as_ref());
    let current = state.get_route();

    let (name, email, is_superadmin) = match &user {
        Some(u) => (u.name.clone(), u.email.clone(), u.is_superadmin),
        None => (String::new(), String::new(), false),
    };

    // Desktop bar
    let nav_links = nav_link_list(&entries, current, "nav-link")?;

    let nav_left = ElementBuilder::new("div")?
        .class("nav-left")
        .child(link("#/", "brand", "SellWell")?)?
        .child(nav_links)?
        .build();

    let nav_user = ElementBuilder::new("div")?
        .class("nav-user")
        .child(el("p", "nav-user-name", &name)?)?
        .child(el("p", "nav-user-email", &email)?)?
        .build();

    let nav_right = ElementBuilder::new("div")?.class("nav-right");
    let nav_right = nav_right.child(nav_user)?;
    let nav_right = if is_superadmin {
        nav_right.child(el("span", "badge-superadmin", "SUPERADMIN")?)?
    } else {
        nav_right
    };
    let nav_right = nav_right
        .child(logout_button(state, "btn-logout desktop")?)?
        .build();

    // Mobile dropdown, toggled by the burger button
    let mobile_menu = build_mobile_menu(state, &entries, current, &name, &email, is_superadmin)?;

    let toggle = el("button", "menu-toggle", "☰")?;
    {
        let menu = mobile_menu.clone();
        on_click(&toggle, move |_| {
            let _ = toggle_class(&menu, "open");
        })?;
    }
    nav_right.append_child(&toggle)?;

    let nav_inner = ElementBuilder::new("div")?
        .class("dashboard-nav-inner")
        .child(nav_left)?
        .child(nav_right)?
        .build();

    let nav = ElementBuilder::new("nav")?
        .class("dashboard-nav")
        .child(nav_inner)?
        .child(mobile_menu)?
        .build();

    let main = ElementBuilder::new("main")?
        .class("dashboard-main")
        .child(content)?
        .build();

    ElementBuilder::new("div")?
        .child(nav)?
        .child(main)
        .map(ElementBuilder::build)
}

fn nav_link_list(
    entries: &[&'static NavEntry],
    current: Route,
    link_class: &str,
) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?.class("nav-links").build();
    for entry in entries {
        let class = if entry.route == current {
            format!("{} active", link_class)
        } else {
            link_class.to_string()
        };
        let anchor = link(entry.route.hash(), &class, &entry.name.to_uppercase())?;
        list.append_child(&anchor)?;
    }
    Ok(list)
}

fn build_mobile_menu(
    state: &AppState,
    entries: &[&'static NavEntry],
    current: Route,
    name: &str,
    email: &str,
    is_superadmin: bool,
) -> Result<Element, JsValue> {
    let user_block = ElementBuilder::new("div")?
        .class("nav-user")
        .child(el("p", "nav-user-name", name)?)?
        .child(el("p", "nav-user-email", email)?)?;
    let user_block = if is_superadmin {
        user_block.child(el("span", "badge-superadmin", "SUPERADMIN")?)?
    } else {
        user_block
    };

    ElementBuilder::new("div")?
        .class("mobile-menu")
        .child(user_block.build())?
        .child(nav_link_list(entries, current, "nav-link")?)?
        .child(logout_button(state, "btn-logout")?)
        .map(ElementBuilder::build)
}

fn logout_button(state: &AppState, class: &str) -> Result<Element, JsValue> {
    let button = el("button", class, "LOGOUT")?;
    let session = state.session.clone();
    on_click(&button, move |_| {
        SessionViewModel::new(session.clone()).logout();
        navigate(Route::Login);
    })?;
    Ok(button)
}
