// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{
    el, input_value, link, on_submit, set_disabled, set_text_content, ElementBuilder,
};
use crate::state::{AppState, Route};
use crate::viewmodels::SessionViewModel;

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let error_box = el("div", "form-error", "")?;

    let email_input = form_input("email", "email", "you@company.com")?;
    let password_input = form_input("password", "password", "Your password")?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-gold")
        .text("SIGN IN")
        .build();

    let form = ElementBuilder::new("form")?
        .child(field_group("EMAIL ADDRESS", &email_input)?)?
        .child(field_group("PASSWORD", &password_input)?)?
        .child(submit_btn.clone())?
        .build();

    // Submit: mutate the session through the viewmodel, then navigate
    // from here. The store itself performs no navigation.
    {
        let state = state.clone();
        let email_input = email_input.clone();
        let password_input = password_input.clone();
        let error_box = error_box.clone();
        let submit_btn = submit_btn.clone();

        on_submit(&form, move |event: web_sys::Event| {
            event.prevent_default();

            let email = input_value(&email_input).trim().to_string();
            let password = input_value(&password_input);
            if email.is_empty() || password.is_empty() {
                set_text_content(&error_box, "Please fill in all fields.");
                return;
            }

            set_text_content(&error_box, "");
            let _ = set_disabled(&submit_btn, true);
            set_text_content(&submit_btn, "SIGNING IN...");

            let state = state.clone();
            let error_box = error_box.clone();
            let submit_btn = submit_btn.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new(state.session.clone());
                match vm.login(&email, &password).await {
                    Ok(user) => {
                        log::info!("✅ [LOGIN] Signed in as user #{}", user.id);
                        navigate(Route::Dashboard);
                    }
                    Err(e) => {
                        // Backend message shown verbatim, e.g.
                        // "Incorrect credentials"
                        set_text_content(&error_box, &e.detail());
                        let _ = set_disabled(&submit_btn, false);
                        set_text_content(&submit_btn, "SIGN IN");
                    }
                }
            });
        })?;
    }

    let footer = ElementBuilder::new("div")?
        .class("auth-footer")
        .text("New partner? ")
        .child(link(Route::Signup.hash(), "", "Create an account")?)?
        .build();

    let card = ElementBuilder::new("div")?
        .class("auth-card")
        .child(el("h2", "", "Partner Login")?)?
        .child(el(
            "p",
            "auth-sub",
            "Enter your credentials to access your dashboard",
        )?)?
        .child(error_box)?
        .child(form)?
        .child(footer)?
        .child(
            ElementBuilder::new("div")?
                .class("auth-footer")
                .child(link(Route::Home.hash(), "", "← Back to SellWell")?)?
                .build(),
        )?
        .build();

    ElementBuilder::new("div")?
        .class("auth-screen")
        .child(card)
        .map(ElementBuilder::build)
}

pub(crate) fn form_input(kind: &str, name: &str, placeholder: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", kind)?
        .attr("name", name)?
        .attr("placeholder", placeholder)
        .map(ElementBuilder::build)
}

pub(crate) fn field_group(label: &str, input: &Element) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("form-group")
        .child(el("label", "", label)?)?
        .child(input.clone())
        .map(ElementBuilder::build)
}
