use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A sales transaction as stored by the backend. Quantities may be null
/// in old rows, so every product column defaults to zero.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SaleRecord {
    pub id: i64,
    pub date: NaiveDateTime,
    pub location: String,
    pub customer_name: String,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub imperial_crown: f64,
    #[serde(default)]
    pub cranberry: f64,
    #[serde(default)]
    pub orange: f64,
    #[serde(default)]
    pub mango: f64,
    #[serde(default)]
    pub black_stallion: f64,
    pub sales_rep: String,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl SaleRecord {
    /// Units across all five products, the UNITS column of the table
    pub fn total_units(&self) -> f64 {
        self.imperial_crown + self.cranberry + self.orange + self.mango + self.black_stallion
    }
}

/// Body for POST /sales/ and PUT /sales/{id}. The date travels as
/// "YYYY-MM-DD" straight from the form's date input.
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
pub struct SalesPayload {
    pub date: String,
    pub customer_name: String,
    pub location: String,
    pub phone_no: String,
    pub imperial_crown: f64,
    pub cranberry: f64,
    pub orange: f64,
    pub mango: f64,
    pub black_stallion: f64,
    pub sales_rep: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_record_and_sums_units() {
        let json = r#"{
            "id": 7,
            "date": "2025-06-01T00:00:00",
            "location": "Lagos",
            "customer_name": "Blue Bar",
            "phone_no": null,
            "imperial_crown": 10.0,
            "cranberry": 2.5,
            "orange": 0.0,
            "mango": 4.0,
            "black_stallion": 1.0,
            "sales_rep": "Ada",
            "user_id": null
        }"#;
        let record: SaleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total_units(), 17.5);
        assert_eq!(record.customer_name, "Blue Bar");
    }

    #[test]
    fn missing_quantities_default_to_zero() {
        let json = r#"{
            "id": 8,
            "date": "2025-06-02T00:00:00",
            "location": "Abuja",
            "customer_name": "Corner Shop",
            "sales_rep": "Ada"
        }"#;
        let record: SaleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total_units(), 0.0);
        assert!(record.phone_no.is_none());
    }
}
