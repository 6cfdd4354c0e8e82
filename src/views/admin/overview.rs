// ============================================================================
// OVERVIEW - analytics dashboard
// ============================================================================
// Four parallel-ish fetches, then pure chart math from the analytics
// viewmodel rendered as stat cards and CSS bars. The aggregate shapes
// are owned by the backend.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{
    append_child, clear_children, el, on_click, set_style, ElementBuilder,
};
use crate::models::{
    DailySalesResponse, LocationPerformanceResponse, Overview, RepPerformanceResponse,
};
use crate::services::{ApiClient, ApiError};
use crate::state::{AppState, Route};
use crate::utils::constants::{DAILY_TREND_DAYS, TOP_PERFORMERS};
use crate::utils::format::{format_count, format_day};
use crate::viewmodels::analytics::{bar_percent, last_days, product_shares, top};
use crate::viewmodels::SessionViewModel;
use crate::views::render_loading;

struct DashboardData {
    overview: Overview,
    daily: DailySalesResponse,
    reps: RepPerformanceResponse,
    locations: LocationPerformanceResponse,
}

pub fn render_overview(state: &AppState) -> Result<Element, JsValue> {
    let refresh_btn = el("button", "btn-outline", "REFRESH")?;

    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(
            ElementBuilder::new("div")?
                .child(el("h1", "page-title", "Analytics")?)?
                .child(el("p", "page-subtitle", "Real-time performance metrics")?)?
                .build(),
        )?
        .child(refresh_btn.clone())?
        .build();

    let body = ElementBuilder::new("div")?.build();

    {
        let state = state.clone();
        let body = body.clone();
        on_click(&refresh_btn, move |_| {
            load(state.clone(), body.clone());
        })?;
    }

    load(state.clone(), body.clone());

    ElementBuilder::new("div")?
        .child(header)?
        .child(body)
        .map(ElementBuilder::build)
}

/// Fetch everything and swap the body in place. Re-entered by REFRESH
/// and RETRY; a stale completion after navigation is dropped.
fn load(state: AppState, body: Element) {
    clear_children(&body);
    if let Ok(spinner) = render_loading("LOADING ANALYTICS") {
        let _ = append_child(&body, &spinner);
    }

    spawn_local(async move {
        let generation = state.generation();
        let api = ApiClient::new();
        let result = fetch_all(&api).await;

        if state.generation() != generation {
            log::debug!("[OVERVIEW] Stale fetch discarded");
            return;
        }

        match result {
            Ok(data) => {
                clear_children(&body);
                match build_dashboard(&data) {
                    Ok(dashboard) => {
                        let _ = append_child(&body, &dashboard);
                    }
                    Err(e) => log::error!("❌ [OVERVIEW] Render failed: {:?}", e),
                }
            }
            Err(e) if e.is_unauthorized() => {
                SessionViewModel::new(state.session.clone()).expire();
                navigate(Route::Login);
            }
            Err(e) => {
                log::error!("❌ [OVERVIEW] Fetch failed: {}", e);
                clear_children(&body);
                if let Ok(error_view) = build_error(&state, &body, &e) {
                    let _ = append_child(&body, &error_view);
                }
            }
        }
    });
}

async fn fetch_all(api: &ApiClient) -> Result<DashboardData, ApiError> {
    Ok(DashboardData {
        overview: api.sales_overview().await?,
        daily: api.daily_sales().await?,
        reps: api.rep_performance().await?,
        locations: api.location_performance().await?,
    })
}

fn build_error(state: &AppState, body: &Element, error: &ApiError) -> Result<Element, JsValue> {
    let retry_btn = el("button", "btn-outline", "RETRY")?;
    {
        let state = state.clone();
        let body = body.clone();
        on_click(&retry_btn, move |_| {
            load(state.clone(), body.clone());
        })?;
    }
    ElementBuilder::new("div")?
        .class("error-state")
        .child(el("p", "", &error.detail())?)?
        .child(retry_btn)
        .map(ElementBuilder::build)
}

fn build_dashboard(data: &DashboardData) -> Result<Element, JsValue> {
    let overview = &data.overview;

    let stats = ElementBuilder::new("div")?
        .class("stat-grid")
        .child(stat_card(
            "TOTAL RECORDS",
            &format_count(overview.total_sales_records as f64),
        )?)?
        .child(stat_card("UNITS SOLD", &format_count(overview.total_units_sold))?)?
        .child(stat_card(
            "CUSTOMERS",
            &format_count(overview.unique_customers as f64),
        )?)?
        .child(stat_card(
            "LOCATIONS",
            &format_count(overview.unique_locations as f64),
        )?)?
        .build();

    let charts_top = ElementBuilder::new("div")?
        .class("chart-grid")
        .child(build_trend_panel(data)?)?
        .child(build_shares_panel(overview)?)?
        .build();

    let charts_bottom = ElementBuilder::new("div")?
        .class("chart-grid")
        .child(build_reps_panel(data)?)?
        .child(build_locations_panel(data)?)?
        .build();

    ElementBuilder::new("div")?
        .child(stats)?
        .child(charts_top)?
        .child(charts_bottom)
        .map(ElementBuilder::build)
}

fn stat_card(label: &str, value: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("stat-card")
        .child(el("p", "stat-label", label)?)?
        .child(el("p", "stat-value", value)?)
        .map(ElementBuilder::build)
}

fn chart_panel(title: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("chart-panel")
        .child(el("h2", "chart-title", title)?)
        .map(ElementBuilder::build)
}

fn bar_row(label: &str, percent: f64, value: &str) -> Result<Element, JsValue> {
    let fill = el("div", "bar-fill", "")?;
    set_style(&fill, &format!("width: {:.1}%", percent))?;
    let track = ElementBuilder::new("div")?
        .class("bar-track")
        .child(fill)?
        .build();
    ElementBuilder::new("div")?
        .class("bar-row")
        .child(el("span", "bar-label", label)?)?
        .child(track)?
        .child(el("span", "bar-value", value)?)
        .map(ElementBuilder::build)
}

fn empty_chart(panel: &Element) -> Result<(), JsValue> {
    append_child(panel, &el("div", "empty-chart", "NO DATA AVAILABLE")?)
}

fn build_trend_panel(data: &DashboardData) -> Result<Element, JsValue> {
    let panel = chart_panel(&format!("SALES TREND / {} DAYS", DAILY_TREND_DAYS))?;
    let points = last_days(&data.daily.daily_sales, DAILY_TREND_DAYS);
    if points.is_empty() {
        empty_chart(&panel)?;
        return Ok(panel);
    }
    let max = points
        .iter()
        .map(|p| p.total_sales)
        .fold(0.0_f64, f64::max);
    for point in points {
        let row = bar_row(
            &format_day(&point.date),
            bar_percent(point.total_sales, max),
            &format_count(point.total_sales),
        )?;
        append_child(&panel, &row)?;
    }
    Ok(panel)
}

fn build_shares_panel(overview: &Overview) -> Result<Element, JsValue> {
    let panel = chart_panel("PRODUCT DISTRIBUTION")?;
    let shares = product_shares(&overview.product_totals);
    if shares.iter().all(|s| s.units == 0.0) {
        empty_chart(&panel)?;
        return Ok(panel);
    }
    for share in shares {
        let row = ElementBuilder::new("div")?
            .class("share-row")
            .child(el("span", "share-name", &share.name)?)?
            .child(el(
                "span",
                "share-pct",
                &format!("{:.1}% · {} units", share.percent, format_count(share.units)),
            )?)?
            .build();
        append_child(&panel, &row)?;
    }
    Ok(panel)
}

fn build_reps_panel(data: &DashboardData) -> Result<Element, JsValue> {
    let panel = chart_panel("TOP SALES REPS")?;
    let reps = top(&data.reps.rep_performance, TOP_PERFORMERS);
    if reps.is_empty() {
        empty_chart(&panel)?;
        return Ok(panel);
    }
    let max = reps.iter().map(|r| r.total_units).fold(0.0_f64, f64::max);
    for rep in reps {
        let row = bar_row(
            &rep.sales_rep,
            bar_percent(rep.total_units, max),
            &format_count(rep.total_units),
        )?;
        append_child(&panel, &row)?;
    }
    Ok(panel)
}

fn build_locations_panel(data: &DashboardData) -> Result<Element, JsValue> {
    let panel = chart_panel("TOP LOCATIONS")?;
    let locations = top(&data.locations.location_performance, TOP_PERFORMERS);
    if locations.is_empty() {
        empty_chart(&panel)?;
        return Ok(panel);
    }

    let thead = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?
        .child(el("th", "", "LOCATION")?)?
        .child(el("th", "", "UNITS")?)?
        .child(el("th", "", "ORDERS")?)?
        .child(el("th", "", "CUSTOMERS")?)?
        .build();
    append_child(&thead, &head_row)?;

    let tbody = ElementBuilder::new("tbody")?.build();
    for location in locations {
        let row = ElementBuilder::new("tr")?
            .child(el("td", "primary", &location.location)?)?
            .child(el("td", "gold", &format_count(location.total_units))?)?
            .child(el("td", "", &format_count(location.total_transactions as f64))?)?
            .child(el("td", "", &format_count(location.unique_customers as f64))?)?
            .build();
        append_child(&tbody, &row)?;
    }

    let table = ElementBuilder::new("table")?
        .class("data-table")
        .child(thead)?
        .child(tbody)?
        .build();
    append_child(&panel, &table)?;
    Ok(panel)
}
