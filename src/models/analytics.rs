use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// Aggregate shapes are owned by the backend. When there is no data yet the
// backend answers `{"error": "No data available"}` instead of the normal
// shape, so every field defaults and the error is carried along.

/// GET /sales/overview
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct Overview {
    pub total_records: u64,
    pub total_sales_records: u64,
    pub total_units_sold: f64,
    pub avg_units_per_transaction: f64,
    pub date_range: DateRange,
    pub unique_customers: u64,
    pub unique_locations: u64,
    pub unique_sales_reps: u64,
    pub product_totals: HashMap<String, f64>,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct DateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// GET /sales/daily
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct DailySalesResponse {
    pub daily_sales: Vec<DailyPoint>,
    pub total_days: u64,
}

/// One day of the trend series. The backend also includes per-product
/// columns; only the total is charted.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct DailyPoint {
    pub date: String,
    pub total_sales: f64,
}

/// GET /sales/performances
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct RepPerformanceResponse {
    pub rep_performance: Vec<RepStat>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct RepStat {
    pub sales_rep: String,
    pub total_units: f64,
    pub avg_units_per_sale: f64,
    pub total_transactions: u64,
    pub unique_customers: u64,
}

/// GET /sales/locations
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct LocationPerformanceResponse {
    pub location_performance: Vec<LocationStat>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct LocationStat {
    pub location: String,
    pub total_units: f64,
    pub avg_units_per_sale: f64,
    pub total_transactions: u64,
    pub unique_customers: u64,
    pub unique_reps: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_overview() {
        let json = r#"{
            "total_records": 120,
            "total_sales_records": 110,
            "total_units_sold": 5400.5,
            "avg_units_per_transaction": 49.1,
            "date_range": {"start": "2025-01-01", "end": "2025-06-30"},
            "unique_customers": 38,
            "unique_locations": 9,
            "unique_sales_reps": 5,
            "product_totals": {"imperial_crown": 2100.0, "mango": 300.5}
        }"#;
        let overview: Overview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.total_sales_records, 110);
        assert_eq!(overview.product_totals["mango"], 300.5);
        assert!(overview.error.is_none());
    }

    #[test]
    fn parses_the_no_data_answer() {
        let overview: Overview = serde_json::from_str(r#"{"error": "No data available"}"#).unwrap();
        assert_eq!(overview.error.as_deref(), Some("No data available"));
        assert_eq!(overview.total_records, 0);
        assert!(overview.product_totals.is_empty());
    }

    #[test]
    fn daily_points_ignore_per_product_columns() {
        let json = r#"{
            "daily_sales": [
                {"date": "2025-06-01", "total_sales": 40.0, "mango": 12.0},
                {"date": "2025-06-02", "total_sales": 13.5, "mango": 0.0}
            ],
            "total_days": 2
        }"#;
        let daily: DailySalesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(daily.daily_sales.len(), 2);
        assert_eq!(daily.daily_sales[1].total_sales, 13.5);
    }
}
