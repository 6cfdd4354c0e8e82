/// Hash-based routes of the portal. Unknown fragments land on the
/// homepage rather than a 404, matching the public site behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Products,
    Login,
    Signup,
    Dashboard,
    DashboardSales,
    DashboardUsers,
    DashboardUpload,
}

impl Route {
    /// Parse `window.location.hash` (with or without the leading '#')
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.trim_end_matches('/');
        match path {
            "" | "/" => Route::Home,
            "/products" => Route::Products,
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/dashboard" => Route::Dashboard,
            "/dashboard/sales" => Route::DashboardSales,
            "/dashboard/users" => Route::DashboardUsers,
            "/dashboard/upload" => Route::DashboardUpload,
            _ => Route::Home,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Products => "#/products",
            Route::Login => "#/login",
            Route::Signup => "#/signup",
            Route::Dashboard => "#/dashboard",
            Route::DashboardSales => "#/dashboard/sales",
            Route::DashboardUsers => "#/dashboard/users",
            Route::DashboardUpload => "#/dashboard/upload",
        }
    }

    /// Routes behind the session guard
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::DashboardSales
                | Route::DashboardUsers
                | Route::DashboardUpload
        )
    }

    /// Protected routes that additionally require the superadmin flag
    pub fn superadmin_only(&self) -> bool {
        matches!(self, Route::DashboardUsers | Route::DashboardUpload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_hashes() {
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/dashboard/sales"), Route::DashboardSales);
        assert_eq!(Route::from_hash("/dashboard/upload"), Route::DashboardUpload);
        assert_eq!(Route::from_hash("#/dashboard/users/"), Route::DashboardUsers);
    }

    #[test]
    fn unknown_hashes_fall_back_to_home() {
        assert_eq!(Route::from_hash("#/nope"), Route::Home);
        assert_eq!(Route::from_hash("#/dashboard/nope"), Route::Home);
    }

    #[test]
    fn round_trips_through_hash() {
        for route in [
            Route::Home,
            Route::Products,
            Route::Login,
            Route::Signup,
            Route::Dashboard,
            Route::DashboardSales,
            Route::DashboardUsers,
            Route::DashboardUpload,
        ] {
            assert_eq!(Route::from_hash(route.hash()), route);
        }
    }

    #[test]
    fn guards_cover_the_dashboard_tree() {
        assert!(!Route::Login.is_protected());
        assert!(Route::Dashboard.is_protected());
        assert!(Route::DashboardSales.is_protected());
        assert!(!Route::Dashboard.superadmin_only());
        assert!(Route::DashboardUsers.superadmin_only());
        assert!(Route::DashboardUpload.superadmin_only());
    }
}
