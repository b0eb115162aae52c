use chrono::NaiveDate;

/// Format a price as US dollars, e.g. 2850.5 -> "$2,850.50"
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as i64;
    let dollars = group_thousands(cents / 100);
    let formatted = format!("${}.{:02}", dollars, cents % 100);
    if price < 0.0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Format a weight in pounds, e.g. 42500.0 -> "42,500 lbs"
pub fn format_weight(weight: f64) -> String {
    format!("{} lbs", group_thousands(weight.round() as i64))
}

/// Format a server date string as "Mar 15, 2024".
///
/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates. Anything else is
/// shown as-is rather than dropped from the row.
pub fn format_date(date: &str) -> String {
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(date) {
        return timestamp.format("%b %-d, %Y").to_string();
    }
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day.format("%b %-d, %Y").to_string();
    }
    date.to_string()
}

/// Group an integer with comma separators, e.g. 1234567 -> "1,234,567"
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(42500), "42,500");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-5200), "-5,200");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(2850.5), "$2,850.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(999.999), "$1,000.00");
        assert_eq!(format_price(1250000.0), "$1,250,000.00");
        assert_eq!(format_price(-75.25), "-$75.25");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(42500.0), "42,500 lbs");
        assert_eq!(format_weight(980.4), "980 lbs");
        assert_eq!(format_weight(0.0), "0 lbs");
    }

    #[test]
    fn test_format_date_plain() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2024-12-01"), "Dec 1, 2024");
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2024-03-15T10:30:00Z"), "Mar 15, 2024");
        assert_eq!(format_date("2024-07-04T23:59:59-05:00"), "Jul 4, 2024");
    }

    #[test]
    fn test_format_date_unparseable_passes_through() {
        assert_eq!(format_date("next tuesday"), "next tuesday");
        assert_eq!(format_date(""), "");
    }
}
