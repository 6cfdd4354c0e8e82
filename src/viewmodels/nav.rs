use crate::models::User;
use crate::state::Route;

/// One dashboard menu entry. The list below is the single source for
/// both the desktop bar and the mobile dropdown; they must never
/// diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub route: Route,
    pub superadmin_only: bool,
}

pub const DASHBOARD_NAV: [NavEntry; 4] = [
    NavEntry {
        name: "Overview",
        route: Route::Dashboard,
        superadmin_only: false,
    },
    NavEntry {
        name: "Sales Data",
        route: Route::DashboardSales,
        superadmin_only: false,
    },
    NavEntry {
        name: "Users",
        route: Route::DashboardUsers,
        superadmin_only: true,
    },
    NavEntry {
        name: "Upload",
        route: Route::DashboardUpload,
        superadmin_only: true,
    },
];

/// Menu visible to the given identity: privileged entries are kept only
/// for superadmins, source order preserved, nothing synthesized.
pub fn visible_entries(user: Option<&User>) -> Vec<&'static NavEntry> {
    let is_superadmin = user.map(|u| u.is_superadmin).unwrap_or(false);
    DASHBOARD_NAV
        .iter()
        .filter(|entry| !entry.superadmin_only || is_superadmin)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(is_superadmin: bool) -> User {
        User {
            id: 1,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            is_superadmin,
            is_active: true,
            role: "admin".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            last_login: None,
        }
    }

    #[test]
    fn superadmins_see_every_entry_in_order() {
        let admin = user(true);
        let names: Vec<_> = visible_entries(Some(&admin))
            .iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Overview", "Sales Data", "Users", "Upload"]);
    }

    #[test]
    fn regular_users_lose_exactly_the_privileged_entries() {
        let regular = user(false);
        let names: Vec<_> = visible_entries(Some(&regular))
            .iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Overview", "Sales Data"]);
    }

    #[test]
    fn no_identity_behaves_like_no_privilege() {
        assert_eq!(visible_entries(None), visible_entries(Some(&user(false))));
    }

    #[test]
    fn desktop_and_mobile_menus_are_the_same_list() {
        // Both call sites go through visible_entries; two calls with the
        // same identity must agree.
        let admin = user(true);
        assert_eq!(visible_entries(Some(&admin)), visible_entries(Some(&admin)));
    }
}
