// ============================================================================
// SALES DATA - transaction table with search, pagination and CRUD
// ============================================================================
// The whole collection is fetched once and filtered/paged client-side.
// Mutations are superadmin-only and always re-fetch the collection, no
// optimistic updates.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{
    add_class, append_child, clear_children, confirm, el, input_value, on_click, on_input,
    on_submit, remove_class, set_disabled, set_input_value, set_text_content, ElementBuilder,
};
use crate::models::{SaleRecord, SalesPayload};
use crate::services::{ApiClient, ApiError};
use crate::state::{AppState, Route};
use crate::utils::constants::{PAGE_SIZE, PRODUCTS};
use crate::utils::format::{format_count, format_date, product_label, today};
use crate::viewmodels::paging::{self, TableQuery};
use crate::viewmodels::SessionViewModel;
use crate::views::login::{field_group, form_input};

struct SalesModal {
    backdrop: Element,
    title: Element,
    error_box: Element,
    save_btn: Element,
    date: Element,
    customer: Element,
    location: Element,
    phone: Element,
    rep: Element,
    quantities: [Element; 5],
}

struct SalesWidgets {
    tbody: Element,
    range_label: Element,
    prev_btn: Element,
    next_btn: Element,
    error_box: Element,
    modal: SalesModal,
    superadmin: bool,
}

#[derive(Clone)]
struct SalesCtx {
    state: AppState,
    records: Rc<RefCell<Vec<SaleRecord>>>,
    query: Rc<RefCell<TableQuery>>,
    editing: Rc<RefCell<Option<i64>>>,
    widgets: Rc<SalesWidgets>,
}

pub fn render_sales(state: &AppState) -> Result<Element, JsValue> {
    let superadmin = state.session.is_superadmin();

    let header_text = ElementBuilder::new("div")?
        .child(el("h1", "page-title", "Sales Data")?)?
        .child(el("p", "page-subtitle", "Complete transaction records")?)?
        .build();
    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(header_text)?;
    let add_btn = el("button", "btn-outline", "ADD ENTRY")?;
    let header = if superadmin {
        header.child(add_btn.clone())?
    } else {
        header
    };
    let header = header.build();

    let error_box = el("div", "form-error", "")?;

    let search_input = form_input("text", "search", "SEARCH BY CUSTOMER, LOCATION, OR REP")?;
    let search_bar = ElementBuilder::new("div")?
        .class("search-bar")
        .child(search_input.clone())?
        .build();

    // Table skeleton
    let head_row = ElementBuilder::new("tr")?
        .child(el("th", "", "DATE")?)?
        .child(el("th", "", "CUSTOMER")?)?
        .child(el("th", "", "LOCATION")?)?
        .child(el("th", "", "SALES REP")?)?
        .child(el("th", "", "UNITS")?)?;
    let head_row = if superadmin {
        head_row.child(el("th", "", "ACTIONS")?)?
    } else {
        head_row
    };
    let thead = ElementBuilder::new("thead")?
        .child(head_row.build())?
        .build();
    let tbody = ElementBuilder::new("tbody")?.build();
    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(thead)?
        .child(tbody.clone())?
        .build();
    let table_scroll = ElementBuilder::new("div")?
        .class("table-scroll")
        .child(table)?
        .build();

    let range_label = el("span", "range-label", "")?;
    let prev_btn = el("button", "btn-outline", "PREVIOUS")?;
    let next_btn = el("button", "btn-outline", "NEXT")?;
    let pager = ElementBuilder::new("div")?
        .class("pager")
        .child(prev_btn.clone())?
        .child(next_btn.clone())?
        .build();
    let footer = ElementBuilder::new("div")?
        .class("table-footer")
        .child(range_label.clone())?
        .child(pager)?
        .build();

    let panel = ElementBuilder::new("div")?
        .class("table-panel")
        .child(table_scroll)?
        .child(footer)?
        .build();

    let modal = build_modal()?;
    let ctx = SalesCtx {
        state: state.clone(),
        records: Rc::new(RefCell::new(Vec::new())),
        query: Rc::new(RefCell::new(TableQuery::new(PAGE_SIZE))),
        editing: Rc::new(RefCell::new(None)),
        widgets: Rc::new(SalesWidgets {
            tbody,
            range_label,
            prev_btn: prev_btn.clone(),
            next_btn: next_btn.clone(),
            error_box: error_box.clone(),
            modal,
            superadmin,
        }),
    };

    // Search resets paging through the clamp inside refresh_table
    {
        let ctx = ctx.clone();
        let search_field = search_input.clone();
        on_input(&search_input, move |_| {
            ctx.query.borrow_mut().search = input_value(&search_field);
            refresh_table(&ctx);
        })?;
    }
    {
        let ctx = ctx.clone();
        on_click(&prev_btn, move |_| {
            {
                let mut query = ctx.query.borrow_mut();
                query.page = query.page.saturating_sub(1).max(1);
            }
            refresh_table(&ctx);
        })?;
    }
    {
        let ctx = ctx.clone();
        on_click(&next_btn, move |_| {
            ctx.query.borrow_mut().page += 1;
            refresh_table(&ctx);
        })?;
    }
    if superadmin {
        let ctx = ctx.clone();
        on_click(&add_btn, move |_| open_create(&ctx))?;
    }
    wire_modal(&ctx)?;

    fetch_records(&ctx);

    ElementBuilder::new("div")?
        .child(header)?
        .child(error_box)?
        .child(search_bar)?
        .child(panel)?
        .child(ctx.widgets.modal.backdrop.clone())
        .map(ElementBuilder::build)
}

/// Re-fetch the whole collection and redraw
fn fetch_records(ctx: &SalesCtx) {
    let ctx = ctx.clone();
    clear_children(&ctx.widgets.tbody);
    spawn_local(async move {
        let generation = ctx.state.generation();
        match ApiClient::new().list_sales().await {
            Ok(records) => {
                if ctx.state.generation() != generation {
                    return;
                }
                log::info!("📊 [SALES] Loaded {} records", records.len());
                *ctx.records.borrow_mut() = records;
                set_text_content(&ctx.widgets.error_box, "");
                refresh_table(&ctx);
            }
            Err(e) if e.is_unauthorized() => {
                SessionViewModel::new(ctx.state.session.clone()).expire();
                navigate(Route::Login);
            }
            Err(e) => {
                log::error!("❌ [SALES] Fetch failed: {}", e);
                set_text_content(&ctx.widgets.error_box, &e.detail());
            }
        }
    });
}

/// Redraw tbody + footer from the current records and query
fn refresh_table(ctx: &SalesCtx) {
    let records = ctx.records.borrow();
    let mut query = ctx.query.borrow_mut();
    let filtered = paging::filter(records.as_slice(), &query, |r| {
        vec![
            r.customer_name.clone(),
            r.location.clone(),
            r.sales_rep.clone(),
        ]
    });
    query.clamp_page(filtered.len());

    let widgets = &ctx.widgets;
    clear_children(&widgets.tbody);
    for record in query.slice(&filtered) {
        match build_row(ctx, record) {
            Ok(row) => {
                let _ = append_child(&widgets.tbody, &row);
            }
            Err(e) => log::error!("❌ [SALES] Row render failed: {:?}", e),
        }
    }

    set_text_content(&widgets.range_label, &query.range_label(filtered.len()));
    let _ = set_disabled(&widgets.prev_btn, !query.has_prev());
    let _ = set_disabled(&widgets.next_btn, !query.has_next(filtered.len()));
}

fn build_row(ctx: &SalesCtx, record: &SaleRecord) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?
        .child(el("td", "", &format_date(&record.date))?)?
        .child(el("td", "primary", &record.customer_name)?)?
        .child(el("td", "", &record.location)?)?
        .child(el("td", "", &record.sales_rep)?)?
        .child(el("td", "gold", &format_count(record.total_units()))?)?;

    if !ctx.widgets.superadmin {
        return Ok(row.build());
    }

    let edit_btn = el("button", "row-action", "EDIT")?;
    {
        let ctx = ctx.clone();
        let record = record.clone();
        on_click(&edit_btn, move |_| open_edit(&ctx, &record))?;
    }

    let delete_btn = el("button", "row-action danger", "DELETE")?;
    {
        let ctx = ctx.clone();
        let entry_id = record.id;
        on_click(&delete_btn, move |_| delete_entry(&ctx, entry_id))?;
    }

    let actions = ElementBuilder::new("td")?
        .child(edit_btn)?
        .child(delete_btn)?
        .build();
    Ok(row.child(actions)?.build())
}

fn delete_entry(ctx: &SalesCtx, entry_id: i64) {
    if !confirm("Are you sure you want to delete this entry?") {
        return;
    }
    let ctx = ctx.clone();
    spawn_local(async move {
        match ApiClient::new().delete_sale(entry_id).await {
            Ok(()) => {
                log::info!("🗑️ [SALES] Deleted entry #{}", entry_id);
                fetch_records(&ctx);
            }
            Err(e) if e.is_unauthorized() => {
                SessionViewModel::new(ctx.state.session.clone()).expire();
                navigate(Route::Login);
            }
            Err(e) => set_text_content(&ctx.widgets.error_box, &e.detail()),
        }
    });
}

// ---- modal -----------------------------------------------------------------

fn build_modal() -> Result<SalesModal, JsValue> {
    let title = el("div", "modal-header", "")?;
    let error_box = el("div", "form-error", "")?;

    let date = form_input("date", "date", "")?;
    let customer = form_input("text", "customer_name", "Customer name")?;
    let location = form_input("text", "location", "Location")?;
    let phone = form_input("text", "phone_no", "Phone number (optional)")?;
    let rep = form_input("text", "sales_rep", "Sales rep")?;

    let details = ElementBuilder::new("div")?
        .class("field-grid")
        .child(field_group("DATE", &date)?)?
        .child(field_group("CUSTOMER NAME", &customer)?)?
        .child(field_group("LOCATION", &location)?)?
        .child(field_group("PHONE NUMBER", &phone)?)?
        .child(field_group("SALES REP", &rep)?)?
        .build();

    let quantity_grid = ElementBuilder::new("div")?.class("field-grid").build();
    let mut quantities: Vec<Element> = Vec::with_capacity(PRODUCTS.len());
    for product in PRODUCTS {
        let input = form_input("number", product, "0")?;
        input.set_attribute("min", "0")?;
        input.set_attribute("step", "0.01")?;
        let group = field_group(&product_label(product).to_uppercase(), &input)?;
        append_child(&quantity_grid, &group)?;
        quantities.push(input);
    }
    let quantities: [Element; 5] = quantities
        .try_into()
        .map_err(|_| JsValue::from_str("quantity inputs"))?;

    let cancel_btn = el("button", "btn-outline", "CANCEL")?;
    cancel_btn.set_attribute("type", "button")?;
    let save_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-gold")
        .text("SAVE")
        .build();
    let modal_footer = ElementBuilder::new("div")?
        .class("modal-footer")
        .child(cancel_btn.clone())?
        .child(save_btn.clone())?
        .build();

    let form = ElementBuilder::new("form")?
        .child(error_box.clone())?
        .child(details)?
        .child(el("h3", "section-label", "PRODUCT QUANTITIES")?)?
        .child(quantity_grid)?
        .child(modal_footer)?
        .build();

    let modal = ElementBuilder::new("div")?
        .class("modal")
        .child(title.clone())?
        .child(
            ElementBuilder::new("div")?
                .class("modal-body")
                .child(form)?
                .build(),
        )?
        .build();

    let backdrop = ElementBuilder::new("div")?
        .class("modal-backdrop")
        .child(modal)?
        .build();

    // The cancel button closes without saving; wired here because it
    // needs nothing from the page context
    {
        let backdrop = backdrop.clone();
        on_click(&cancel_btn, move |_| {
            let _ = remove_class(&backdrop, "show");
        })?;
    }

    Ok(SalesModal {
        backdrop,
        title,
        error_box,
        save_btn,
        date,
        customer,
        location,
        phone,
        rep,
        quantities,
    })
}

fn wire_modal(ctx: &SalesCtx) -> Result<(), JsValue> {
    // The form is the modal's only form element
    let form = ctx
        .widgets
        .modal
        .backdrop
        .query_selector("form")?
        .ok_or_else(|| JsValue::from_str("modal form missing"))?;
    let ctx = ctx.clone();
    on_submit(&form, move |event: web_sys::Event| {
        event.prevent_default();
        submit_modal(&ctx);
    })
}

fn open_create(ctx: &SalesCtx) {
    let modal = &ctx.widgets.modal;
    *ctx.editing.borrow_mut() = None;
    set_text_content(&modal.title, "NEW SALE");
    set_text_content(&modal.save_btn, "CREATE");
    set_text_content(&modal.error_box, "");
    set_input_value(&modal.date, &today());
    for input in [&modal.customer, &modal.location, &modal.phone, &modal.rep] {
        set_input_value(input, "");
    }
    for input in &modal.quantities {
        set_input_value(input, "0");
    }
    let _ = add_class(&modal.backdrop, "show");
}

fn open_edit(ctx: &SalesCtx, record: &SaleRecord) {
    let modal = &ctx.widgets.modal;
    *ctx.editing.borrow_mut() = Some(record.id);
    set_text_content(&modal.title, "EDIT SALE");
    set_text_content(&modal.save_btn, "UPDATE");
    set_text_content(&modal.error_box, "");
    set_input_value(&modal.date, &record.date.format("%Y-%m-%d").to_string());
    set_input_value(&modal.customer, &record.customer_name);
    set_input_value(&modal.location, &record.location);
    set_input_value(&modal.phone, record.phone_no.as_deref().unwrap_or(""));
    set_input_value(&modal.rep, &record.sales_rep);
    let amounts = [
        record.imperial_crown,
        record.cranberry,
        record.orange,
        record.mango,
        record.black_stallion,
    ];
    for (input, amount) in modal.quantities.iter().zip(amounts) {
        set_input_value(input, &amount.to_string());
    }
    let _ = add_class(&modal.backdrop, "show");
}

fn submit_modal(ctx: &SalesCtx) {
    let modal = &ctx.widgets.modal;

    let payload = SalesPayload {
        date: input_value(&modal.date),
        customer_name: input_value(&modal.customer).trim().to_string(),
        location: input_value(&modal.location).trim().to_string(),
        phone_no: input_value(&modal.phone).trim().to_string(),
        imperial_crown: quantity(&modal.quantities[0]),
        cranberry: quantity(&modal.quantities[1]),
        orange: quantity(&modal.quantities[2]),
        mango: quantity(&modal.quantities[3]),
        black_stallion: quantity(&modal.quantities[4]),
        sales_rep: input_value(&modal.rep).trim().to_string(),
    };

    if payload.date.is_empty()
        || payload.customer_name.is_empty()
        || payload.location.is_empty()
        || payload.sales_rep.is_empty()
    {
        set_text_content(&modal.error_box, "Please fill in all required fields.");
        return;
    }

    set_text_content(&modal.error_box, "");
    let _ = set_disabled(&modal.save_btn, true);

    let ctx = ctx.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        let editing = *ctx.editing.borrow();
        let result = match editing {
            Some(entry_id) => api.update_sale(entry_id, &payload).await,
            None => api.create_sale(&payload).await,
        };
        let modal = &ctx.widgets.modal;
        let _ = set_disabled(&modal.save_btn, false);
        match result {
            Ok(record) => {
                log::info!("✅ [SALES] Saved entry #{}", record.id);
                let _ = remove_class(&modal.backdrop, "show");
                fetch_records(&ctx);
            }
            Err(e) if e.is_unauthorized() => {
                SessionViewModel::new(ctx.state.session.clone()).expire();
                navigate(Route::Login);
            }
            Err(e) => set_text_content(&modal.error_box, &e.detail()),
        }
    });
}

fn quantity(input: &Element) -> f64 {
    input_value(input).parse::<f64>().unwrap_or(0.0)
}
