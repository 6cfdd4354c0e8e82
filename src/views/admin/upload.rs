// ============================================================================
// UPLOAD DATA - spreadsheet bulk ingestion
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::app::navigate;
use crate::dom::{el, on_change, on_click, set_disabled, set_text_content, ElementBuilder};
use crate::services::ApiClient;
use crate::state::{AppState, Route};
use crate::viewmodels::SessionViewModel;

pub fn render_upload(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(
            ElementBuilder::new("div")?
                .child(el("h1", "page-title", "Upload Data")?)?
                .child(el("p", "page-subtitle", "Import sales data from Excel files")?)?
                .build(),
        )?
        .build();

    let error_box = el("div", "form-error", "")?;
    let success_box = el("div", "form-success", "")?;
    let filename_label = el("p", "upload-filename", "")?;

    let file_input = ElementBuilder::new("input")?
        .attr("type", "file")?
        .attr("id", "file-upload")?
        .attr("accept", ".xlsx,.xls")?
        .build();

    let drop_zone = ElementBuilder::new("label")?
        .class("upload-drop")
        .attr("for", "file-upload")?
        .text("Click to choose an Excel file (.xlsx or .xls)")
        .child(file_input.clone())?
        .build();
    file_input.set_attribute("style", "display: none")?;

    let upload_btn = el("button", "btn-gold", "UPLOAD FILE")?;
    let _ = set_disabled(&upload_btn, true);

    let selected: Rc<RefCell<Option<web_sys::File>>> = Rc::new(RefCell::new(None));

    // File choice + extension check
    {
        let selected = selected.clone();
        let input_el = file_input.clone();
        let filename_label = filename_label.clone();
        let error_box = error_box.clone();
        let success_box = success_box.clone();
        let upload_btn = upload_btn.clone();
        on_change(&file_input, move |_| {
            set_text_content(&success_box, "");
            let file = input_el
                .dyn_ref::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            match file {
                Some(file) if has_excel_extension(&file.name()) => {
                    set_text_content(&error_box, "");
                    set_text_content(&filename_label, &format!("SELECTED: {}", file.name()));
                    *selected.borrow_mut() = Some(file);
                    let _ = set_disabled(&upload_btn, false);
                }
                Some(_) => {
                    set_text_content(
                        &error_box,
                        "Please select a valid Excel file (.xlsx or .xls)",
                    );
                    set_text_content(&filename_label, "");
                    *selected.borrow_mut() = None;
                    let _ = set_disabled(&upload_btn, true);
                }
                None => {
                    set_text_content(&filename_label, "");
                    *selected.borrow_mut() = None;
                    let _ = set_disabled(&upload_btn, true);
                }
            }
        })?;
    }

    // Upload
    {
        let state = state.clone();
        let selected = selected.clone();
        let input_el = file_input.clone();
        let filename_label = filename_label.clone();
        let error_box = error_box.clone();
        let success_box = success_box.clone();
        let btn = upload_btn.clone();
        on_click(&upload_btn, move |_| {
            let file = match selected.borrow().clone() {
                Some(file) => file,
                None => {
                    set_text_content(&error_box, "Please select a file to upload");
                    return;
                }
            };

            set_text_content(&error_box, "");
            set_text_content(&success_box, "");
            let _ = set_disabled(&btn, true);
            set_text_content(&btn, "UPLOADING...");

            let state = state.clone();
            let selected = selected.clone();
            let input_el = input_el.clone();
            let filename_label = filename_label.clone();
            let error_box = error_box.clone();
            let success_box = success_box.clone();
            let btn = btn.clone();
            spawn_local(async move {
                let result = ApiClient::new().upload_sales(&file).await;
                set_text_content(&btn, "UPLOAD FILE");
                match result {
                    Ok(response) => {
                        log::info!("📥 [UPLOAD] {}", response.message);
                        set_text_content(&success_box, &response.message);
                        set_text_content(&filename_label, "");
                        *selected.borrow_mut() = None;
                        if let Some(input) = input_el.dyn_ref::<HtmlInputElement>() {
                            input.set_value("");
                        }
                        let _ = set_disabled(&btn, true);
                    }
                    Err(e) if e.is_unauthorized() => {
                        SessionViewModel::new(state.session.clone()).expire();
                        navigate(Route::Login);
                    }
                    Err(e) => {
                        set_text_content(&error_box, &e.detail());
                        let _ = set_disabled(&btn, false);
                    }
                }
            });
        })?;
    }

    let hints = ElementBuilder::new("div")?
        .class("upload-hints")
        .child(el("p", "", "The spreadsheet must contain these columns:")?)?
        .child(hint_list(&[
            "date, location, sales_rep, customer_name, phone_no",
            "imperial_crown, cranberry, orange, mango, black_stallion",
        ])?)?
        .child(el("p", "", "Tips:")?)?
        .child(hint_list(&[
            "Remove empty rows before upload",
            "Check date formats before uploading",
            "Existing entries with the same date, customer and location are updated in place",
        ])?)?
        .build();

    let panel = ElementBuilder::new("div")?
        .class("upload-panel")
        .child(error_box)?
        .child(success_box)?
        .child(drop_zone)?
        .child(filename_label)?
        .child(upload_btn)?
        .child(hints)?
        .build();

    ElementBuilder::new("div")?
        .child(header)?
        .child(panel)
        .map(ElementBuilder::build)
}

fn has_excel_extension(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".xlsx") || lower.ends_with(".xls")
}

fn hint_list(items: &[&str]) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("ul")?.build();
    for item in items {
        list.append_child(&el("li", "", item)?.into())?;
    }
    Ok(list)
}
