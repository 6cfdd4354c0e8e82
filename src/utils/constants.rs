/// Backend API base URL.
/// Compile-time configured via build.rs (.env):
/// - Development: http://localhost:8000 (default)
/// - Production: set API_URL before building
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// localStorage key for the bearer token. The only client-side persistence.
pub const TOKEN_STORAGE_KEY: &str = "sellwell_token";

/// Client-side page size for the sales and users tables
pub const PAGE_SIZE: usize = 10;

/// Days of daily sales shown on the overview trend chart
pub const DAILY_TREND_DAYS: usize = 14;

/// Rows shown in the top reps / top locations panels
pub const TOP_PERFORMERS: usize = 5;

/// Product columns of a sales record, in display order
pub const PRODUCTS: [&str; 5] = [
    "imperial_crown",
    "cranberry",
    "orange",
    "mango",
    "black_stallion",
];
