// ============================================================================
// SIGNUP VIEW - employee self-registration
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{
    el, input_value, link, on_submit, set_disabled, set_text_content, ElementBuilder,
};
use crate::models::UserPayload;
use crate::services::ApiClient;
use crate::state::Route;
use crate::views::login::{field_group, form_input};

pub fn render_signup() -> Result<Element, JsValue> {
    let error_box = el("div", "form-error", "")?;
    let success_box = el("div", "form-success", "")?;

    let name_input = form_input("text", "name", "Full name")?;
    let email_input = form_input("email", "email", "you@company.com")?;
    let password_input = form_input("password", "password", "Choose a password")?;
    let confirm_input = form_input("password", "confirm", "Repeat the password")?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-gold")
        .text("CREATE ACCOUNT")
        .build();

    let form = ElementBuilder::new("form")?
        .child(field_group("FULL NAME", &name_input)?)?
        .child(field_group("EMAIL ADDRESS", &email_input)?)?
        .child(field_group("PASSWORD", &password_input)?)?
        .child(field_group("CONFIRM PASSWORD", &confirm_input)?)?
        .child(submit_btn.clone())?
        .build();

    {
        let name_input = name_input.clone();
        let email_input = email_input.clone();
        let password_input = password_input.clone();
        let confirm_input = confirm_input.clone();
        let error_box = error_box.clone();
        let success_box = success_box.clone();
        let submit_btn = submit_btn.clone();

        on_submit(&form, move |event: web_sys::Event| {
            event.prevent_default();

            let name = input_value(&name_input).trim().to_string();
            let email = input_value(&email_input).trim().to_string();
            let password = input_value(&password_input);
            let confirm = input_value(&confirm_input);

            set_text_content(&success_box, "");
            if name.is_empty() || email.is_empty() || password.is_empty() {
                set_text_content(&error_box, "Please fill in all fields.");
                return;
            }
            if password != confirm {
                set_text_content(&error_box, "Passwords do not match.");
                return;
            }

            set_text_content(&error_box, "");
            let _ = set_disabled(&submit_btn, true);
            set_text_content(&submit_btn, "CREATING...");

            let payload = UserPayload {
                name,
                email,
                password,
            };
            let error_box = error_box.clone();
            let success_box = success_box.clone();
            let submit_btn = submit_btn.clone();
            spawn_local(async move {
                match ApiClient::new().signup(&payload).await {
                    Ok(user) => {
                        log::info!("✅ [SIGNUP] Account created for user #{}", user.id);
                        set_text_content(
                            &success_box,
                            "Account created. Redirecting to login...",
                        );
                        // Give the message a beat before switching screens
                        gloo_timers::callback::Timeout::new(1200, || {
                            navigate(Route::Login);
                        })
                        .forget();
                    }
                    Err(e) => {
                        set_text_content(&error_box, &e.detail());
                        let _ = set_disabled(&submit_btn, false);
                        set_text_content(&submit_btn, "CREATE ACCOUNT");
                    }
                }
            });
        })?;
    }

    let footer = ElementBuilder::new("div")?
        .class("auth-footer")
        .text("Already a partner? ")
        .child(link(Route::Login.hash(), "", "Sign in")?)?
        .build();

    let card = ElementBuilder::new("div")?
        .class("auth-card")
        .child(el("h2", "", "Create Account")?)?
        .child(el(
            "p",
            "auth-sub",
            "Register to access the SellWell partner dashboard",
        )?)?
        .child(error_box)?
        .child(success_box)?
        .child(form)?
        .child(footer)?
        .build();

    ElementBuilder::new("div")?
        .class("auth-screen")
        .child(card)
        .map(ElementBuilder::build)
}
