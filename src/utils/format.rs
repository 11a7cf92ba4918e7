use chrono::DateTime;

/// Render a backend RFC 3339 timestamp for display, e.g.
/// "28 July 2025, 10:53 am". Unparseable input is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%-d %B %Y, %-I:%M %P").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Amounts render without a trailing `.0` for whole values.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339() {
        assert_eq!(
            format_timestamp("2025-07-28T10:53:37.216Z"),
            "28 July 2025, 10:53 am"
        );
    }

    #[test]
    fn passes_through_garbage() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn formats_amounts() {
        assert_eq!(format_amount(500.0), "500");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(0.0), "0");
    }
}
