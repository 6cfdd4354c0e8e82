pub mod analytics;
pub mod auth;
pub mod sales;
pub mod user;

pub use analytics::{
    DailyPoint, DailySalesResponse, LocationPerformanceResponse, LocationStat, Overview,
    RepPerformanceResponse, RepStat,
};
pub use auth::{ErrorDetail, MessageResponse, TokenResponse};
pub use sales::{SaleRecord, SalesPayload};
pub use user::{User, UserPayload};
