use chrono::{NaiveDate, NaiveDateTime};

/// Format a backend timestamp ("2025-06-01T00:00:00") for table display.
/// Falls back to "N/A" on anything unparseable, mirroring how the tables
/// must never crash on bad data.
pub fn format_date(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Format a plain "YYYY-MM-DD" day label for the trend chart axis
pub fn format_day(day: &str) -> String {
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => day.to_string(),
    }
}

/// Today as "YYYY-MM-DD" in the browser's local time, used to prefill the
/// date field of a new sales entry.
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Integer display with thousands separators, e.g. 12847 -> "12,847"
pub fn format_count(value: f64) -> String {
    let rounded = value.round().abs() as u64;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value.round() < 0.0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// "imperial_crown" -> "Imperial Crown" for chart labels
pub fn product_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_timestamps_for_tables() {
        let ts = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_date(&ts), "Jun 1, 2025");
    }

    #[test]
    fn formats_day_labels_and_passes_through_garbage() {
        assert_eq!(format_day("2025-12-09"), "Dec 9");
        assert_eq!(format_day("not-a-date"), "not-a-date");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.4), "999");
        assert_eq!(format_count(12847.0), "12,847");
        assert_eq!(format_count(1234567.0), "1,234,567");
    }

    #[test]
    fn labels_products() {
        assert_eq!(product_label("imperial_crown"), "Imperial Crown");
        assert_eq!(product_label("mango"), "Mango");
    }
}
