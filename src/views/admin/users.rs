// ============================================================================
// USER MANAGEMENT - superadmin-only account administration
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
use crate::models::{User, UserPayload};
use crate::services::ApiClient;
use crate::state::{AppState, Route};
use crate::utils::constants::PAGE_SIZE;
use crate::utils::format::format_date;
use crate::viewmodels::paging::{self, TableQuery};
use crate::viewmodels::SessionViewModel;
use crate::views::login::{field_group, form_input};

struct UserModal {
    backdrop: Element,
    error_box: Element,
    save_btn: Element,
    name: Element,
    email: Element,
    password: Element,
}

struct UserWidgets {
    tbody: Element,
    range_label: Element,
    prev_btn: Element,
    next_btn: Element,
    error_box: Element,
    modal: UserModal,
}

#[derive(Clone)]
struct UsersCtx {
    state: AppState,
    records: Rc<RefCell<Vec<User>>>,
    query: Rc<RefCell<TableQuery>>,
    widgets: Rc<UserWidgets>,
}

pub fn render_users(state: &AppState) -> Result<Element, JsValue> {
    let add_btn = el("button", "btn-outline", "ADD USER")?;
    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(
            ElementBuilder::new("div")?
                .child(el("h1", "page-title", "Users")?)?
                .child(el("p", "page-subtitle", "Accounts with dashboard access")?)?
                .build(),
        )?
        .child(add_btn.clone())?
        .build();

    let error_box = el("div", "form-error", "")?;

    let search_input = form_input("text", "search", "SEARCH BY NAME OR EMAIL")?;
    let search_bar = ElementBuilder::new("div")?
        .class("search-bar")
        .child(search_input.clone())?
        .build();

    let thead = ElementBuilder::new("thead")?
        .child(
            ElementBuilder::new("tr")?
                .child(el("th", "", "NAME")?)?
                .child(el("th", "", "EMAIL")?)?
                .child(el("th", "", "ROLE")?)?
                .child(el("th", "", "STATUS")?)?
                .child(el("th", "", "CREATED")?)?
                .child(el("th", "", "LAST LOGIN")?)?
                .child(el("th", "", "ACTIONS")?)?
                .build(),
        )?
        .build();
    let tbody = ElementBuilder::new("tbody")?.build();
    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(thead)?
        .child(tbody.clone())?
        .build();

    let range_label = el("span", "range-label", "")?;
    let prev_btn = el("button", "btn-outline", "PREVIOUS")?;
    let next_btn = el("button", "btn-outline", "NEXT")?;
    let footer = ElementBuilder::new("div")?
        .class("table-footer")
        .child(range_label.clone())?
        .child(
            ElementBuilder::new("div")?
                .class("pager")
                .child(prev_btn.clone())?
                .child(next_btn.clone())?
                .build(),
        )?
        .build();

    let panel = ElementBuilder::new("div")?
        .class("table-panel")
        .child(
            ElementBuilder::new("div")?
                .class("table-scroll")
                .child(table)?
                .build(),
        )?
        .child(footer)?
        .build();

    let modal = build_modal()?;
    let ctx = UsersCtx {
        state: state.clone(),
        records: Rc::new(RefCell::new(Vec::new())),
        query: Rc::new(RefCell::new(TableQuery::new(PAGE_SIZE))),
        widgets: Rc::new(UserWidgets {
            tbody,
            range_label,
            prev_btn: prev_btn.clone(),
            next_btn: next_btn.clone(),
            error_box: error_box.clone(),
            modal,
        }),
    };

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
    {
        let ctx = ctx.clone();
        on_click(&add_btn, move |_| open_create(&ctx))?;
    }
    wire_modal(&ctx)?;

    fetch_users(&ctx);

    ElementBuilder::new("div")?
        .child(header)?
        .child(error_box)?
        .child(search_bar)?
        .child(panel)?
        .child(ctx.widgets.modal.backdrop.clone())
        .map(ElementBuilder::build)
}

fn fetch_users(ctx: &UsersCtx) {
    let ctx = ctx.clone();
    clear_children(&ctx.widgets.tbody);
    spawn_local(async move {
        let generation = ctx.state.generation();
        match ApiClient::new().list_users().await {
            Ok(users) => {
                if ctx.state.generation() != generation {
                    return;
                }
                log::info!("👥 [USERS] Loaded {} accounts", users.len());
                *ctx.records.borrow_mut() = users;
                set_text_content(&ctx.widgets.error_box, "");
                refresh_table(&ctx);
            }
            Err(e) if e.is_unauthorized() => {
                SessionViewModel::new(ctx.state.session.clone()).expire();
                navigate(Route::Login);
            }
            Err(e) => {
                log::error!("❌ [USERS] Fetch failed: {}", e);
                set_text_content(&ctx.widgets.error_box, &e.detail());
            }
        }
    });
}

fn refresh_table(ctx: &UsersCtx) {
    let records = ctx.records.borrow();
    let mut query = ctx.query.borrow_mut();
    let filtered = paging::filter(records.as_slice(), &query, |u| {
        vec![u.name.clone(), u.email.clone()]
    });
    query.clamp_page(filtered.len());

    let widgets = &ctx.widgets;
    clear_children(&widgets.tbody);
    for user in query.slice(&filtered) {
        match build_row(ctx, user) {
            Ok(row) => {
                let _ = append_child(&widgets.tbody, &row);
            }
            Err(e) => log::error!("❌ [USERS] Row render failed: {:?}", e),
        }
    }

    set_text_content(&widgets.range_label, &query.range_label(filtered.len()));
    let _ = set_disabled(&widgets.prev_btn, !query.has_prev());
    let _ = set_disabled(&widgets.next_btn, !query.has_next(filtered.len()));
}

fn build_row(ctx: &UsersCtx, user: &User) -> Result<Element, JsValue> {
    let status = if user.is_active {
        el("span", "badge-active", "ACTIVE")?
    } else {
        el("span", "badge-inactive", "INACTIVE")?
    };
    let last_login = match &user.last_login {
        Some(timestamp) => format_date(timestamp),
        None => "NEVER".to_string(),
    };

    let actions = ElementBuilder::new("td")?;
    let actions = if user.is_superadmin {
        actions.child(el("span", "badge-superadmin", "SUPERADMIN")?)?
    } else {
        let grant_btn = el("button", "row-action", "GRANT SUPERADMIN")?;
        let ctx = ctx.clone();
        let user_id = user.id;
        let email = user.email.clone();
        on_click(&grant_btn, move |_| grant(&ctx, user_id, &email))?;
        actions.child(grant_btn)?
    };

    ElementBuilder::new("tr")?
        .child(el("td", "primary", &user.name)?)?
        .child(el("td", "", &user.email)?)?
        .child(el("td", "", &user.role)?)?
        .child(
            ElementBuilder::new("td")?.child(status)?.build(),
        )?
        .child(el("td", "", &format_date(&user.created_at))?)?
        .child(el("td", "", &last_login)?)?
        .child(actions.build())
        .map(ElementBuilder::build)
}

fn grant(ctx: &UsersCtx, user_id: i64, email: &str) {
    if !confirm(&format!("Grant superadmin privileges to {}?", email)) {
        return;
    }
    let ctx = ctx.clone();
    spawn_local(async move {
        match ApiClient::new().grant_superadmin(user_id).await {
            Ok(response) => {
                log::info!("⭐ [USERS] {}", response.message);
                fetch_users(&ctx);
            }
            Err(e) if e.is_unauthorized() => {
                SessionViewModel::new(ctx.state.session.clone()).expire();
                navigate(Route::Login);
            }
            Err(e) => set_text_content(&ctx.widgets.error_box, &e.detail()),
        }
    });
}

// ---- create-user modal -----------------------------------------------------

fn build_modal() -> Result<UserModal, JsValue> {
    let error_box = el("div", "form-error", "")?;
    let name = form_input("text", "name", "Full name")?;
    let email = form_input("email", "email", "user@company.com")?;
    let password = form_input("password", "password", "Temporary password")?;

    let cancel_btn = el("button", "btn-outline", "CANCEL")?;
    cancel_btn.set_attribute("type", "button")?;
    let save_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-gold")
        .text("CREATE")
        .build();

    let form = ElementBuilder::new("form")?
        .child(error_box.clone())?
        .child(field_group("FULL NAME", &name)?)?
        .child(field_group("EMAIL ADDRESS", &email)?)?
        .child(field_group("PASSWORD", &password)?)?
        .child(
            ElementBuilder::new("div")?
                .class("modal-footer")
                .child(cancel_btn.clone())?
                .child(save_btn.clone())?
                .build(),
        )?
        .build();

    let modal = ElementBuilder::new("div")?
        .class("modal")
        .child(el("div", "modal-header", "NEW USER")?)?
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

    {
        let backdrop = backdrop.clone();
        on_click(&cancel_btn, move |_| {
            let _ = remove_class(&backdrop, "show");
        })?;
    }

    Ok(UserModal {
        backdrop,
        error_box,
        save_btn,
        name,
        email,
        password,
    })
}

fn wire_modal(ctx: &UsersCtx) -> Result<(), JsValue> {
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

fn open_create(ctx: &UsersCtx) {
    let modal = &ctx.widgets.modal;
    set_text_content(&modal.error_box, "");
    for input in [&modal.name, &modal.email, &modal.password] {
        set_input_value(input, "");
    }
    let _ = add_class(&modal.backdrop, "show");
}

fn submit_modal(ctx: &UsersCtx) {
    let modal = &ctx.widgets.modal;
    let payload = UserPayload {
        name: input_value(&modal.name).trim().to_string(),
        email: input_value(&modal.email).trim().to_string(),
        password: input_value(&modal.password),
    };
    if payload.name.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        set_text_content(&modal.error_box, "Please fill in all fields.");
        return;
    }

    set_text_content(&modal.error_box, "");
    let _ = set_disabled(&modal.save_btn, true);

    let ctx = ctx.clone();
    spawn_local(async move {
        let result = ApiClient::new().create_user(&payload).await;
        let modal = &ctx.widgets.modal;
        let _ = set_disabled(&modal.save_btn, false);
        match result {
            Ok(user) => {
                log::info!("✅ [USERS] Created account #{}", user.id);
                let _ = remove_class(&modal.backdrop, "show");
                fetch_users(&ctx);
            }
            Err(e) if e.is_unauthorized() => {
                SessionViewModel::new(ctx.state.session.clone()).expire();
                navigate(Route::Login);
            }
            Err(e) => set_text_content(&modal.error_box, &e.detail()),
        }
    });
}
