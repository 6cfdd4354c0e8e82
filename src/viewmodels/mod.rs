// ============================================================================
// VIEWMODELS - UI logic, kept free of DOM so it runs under `cargo test`
// ============================================================================

pub mod analytics;
pub mod nav;
pub mod paging;
pub mod session_viewmodel;

pub use nav::{visible_entries, NavEntry, DASHBOARD_NAV};
pub use paging::TableQuery;
pub use session_viewmodel::SessionViewModel;
