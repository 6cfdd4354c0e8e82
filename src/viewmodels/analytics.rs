// Chart preparation for the overview page. The backend owns the
// aggregate math; this only slices, orders and turns totals into
// percentages for display.

use std::collections::HashMap;

use crate::models::DailyPoint;
use crate::utils::constants::PRODUCTS;
use crate::utils::format::product_label;

/// One slice of the product distribution panel
#[derive(Debug, Clone, PartialEq)]
pub struct ProductShare {
    pub name: String,
    pub units: f64,
    pub percent: f64,
}

/// Product totals in the fixed product order, with each product's share
/// of all units. An empty or all-zero map yields zero percentages
/// instead of NaN.
pub fn product_shares(totals: &HashMap<String, f64>) -> Vec<ProductShare> {
    let total: f64 = PRODUCTS
        .iter()
        .filter_map(|key| totals.get(*key))
        .sum();
    PRODUCTS
        .iter()
        .map(|key| {
            let units = totals.get(*key).copied().unwrap_or(0.0);
            let percent = if total > 0.0 {
                units / total * 100.0
            } else {
                0.0
            };
            ProductShare {
                name: product_label(key),
                units,
                percent,
            }
        })
        .collect()
}

/// Tail of the daily series for the trend chart
pub fn last_days(points: &[DailyPoint], days: usize) -> &[DailyPoint] {
    let start = points.len().saturating_sub(days);
    &points[start..]
}

/// Head of an already-sorted performance list
pub fn top<T>(items: &[T], limit: usize) -> &[T] {
    &items[..items.len().min(limit)]
}

/// Bar length as a percentage of the series maximum, for the CSS bars
pub fn bar_percent(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_follow_the_product_order_and_sum_to_100() {
        let mut totals = HashMap::new();
        totals.insert("mango".to_string(), 25.0);
        totals.insert("imperial_crown".to_string(), 75.0);
        let shares = product_shares(&totals);
        assert_eq!(shares.len(), 5);
        assert_eq!(shares[0].name, "Imperial Crown");
        assert_eq!(shares[0].percent, 75.0);
        assert_eq!(shares[3].name, "Mango");
        assert_eq!(shares[3].percent, 25.0);
        let sum: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_totals_give_zero_percentages() {
        let shares = product_shares(&HashMap::new());
        assert!(shares.iter().all(|s| s.percent == 0.0 && s.units == 0.0));
    }

    #[test]
    fn trend_keeps_only_the_tail() {
        let points: Vec<DailyPoint> = (0..20)
            .map(|i| DailyPoint {
                date: format!("2025-06-{:02}", i + 1),
                total_sales: i as f64,
            })
            .collect();
        let tail = last_days(&points, 14);
        assert_eq!(tail.len(), 14);
        assert_eq!(tail[0].date, "2025-06-07");
        assert_eq!(last_days(&points[..3], 14).len(), 3);
    }

    #[test]
    fn top_never_reads_past_the_end() {
        let items = [1, 2, 3];
        assert_eq!(top(&items, 5), &[1, 2, 3]);
        assert_eq!(top(&items, 2), &[1, 2]);
    }

    #[test]
    fn bars_guard_the_empty_series() {
        assert_eq!(bar_percent(5.0, 10.0), 50.0);
        assert_eq!(bar_percent(5.0, 0.0), 0.0);
        assert_eq!(bar_percent(20.0, 10.0), 100.0);
    }
}
