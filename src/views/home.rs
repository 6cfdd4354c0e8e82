// ============================================================================
// HOMEPAGE - public marketing page
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{el, link, ElementBuilder};
use crate::state::Route;
use crate::views::products::CATALOG;

pub fn render_home() -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h1")?
        .text("Crafted for ")
        .child(el("span", "accent", "Excellence")?)?
        .build();

    let actions = ElementBuilder::new("div")?
        .class("hero-actions")
        .child(link(Route::Products.hash(), "btn-gold", "VIEW PRODUCTS")?)?
        .child(link(Route::Login.hash(), "btn-outline", "PARTNER LOGIN")?)?
        .build();

    let hero = ElementBuilder::new("div")?
        .class("hero")
        .child(title)?
        .child(el(
            "p",
            "",
            "SellWell produces a small family of premium beverages and \
             sells them through a trusted network of partners. Explore the \
             range, or sign in to manage your orders and analytics.",
        )?)?
        .child(actions)?
        .build();

    // Showcase: name + tagline only, the catalog page has the full story
    let showcase = ElementBuilder::new("div")?.class("product-grid").build();
    for (name, tagline, _) in CATALOG {
        let card = ElementBuilder::new("div")?
            .class("product-card")
            .child(el("h3", "", name)?)?
            .child(el("p", "tagline", tagline)?)?
            .build();
        showcase.append_child(&card)?;
    }

    ElementBuilder::new("div")?
        .child(public_nav()?)?
        .child(hero)?
        .child(showcase)?
        .child(public_footer()?)
        .map(ElementBuilder::build)
}

/// Top bar shared by the public pages
pub fn public_nav() -> Result<Element, JsValue> {
    let links = ElementBuilder::new("div")?
        .class("public-nav-links")
        .child(link(Route::Home.hash(), "", "HOME")?)?
        .child(link(Route::Products.hash(), "", "PRODUCTS")?)?
        .child(link(Route::Login.hash(), "", "PARTNER LOGIN")?)?
        .child(link(Route::Signup.hash(), "", "SIGN UP")?)?
        .build();

    ElementBuilder::new("nav")?
        .class("public-nav")
        .child(link(Route::Home.hash(), "brand", "SellWell")?)?
        .child(links)
        .map(ElementBuilder::build)
}

pub fn public_footer() -> Result<Element, JsValue> {
    el(
        "footer",
        "footer",
        "© 2025 Charvet Group. All rights reserved.",
    )
}
