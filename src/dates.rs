use chrono::NaiveDate;

/// Parses a transaction date in either accepted source format: canonical ISO
/// (`2023-02-01`) or day-first slash-separated (`1/2/2023`, `01/02/2023`).
pub fn parse_flexible(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .ok()
}

/// Canonical form used everywhere a date is written back or compared.
pub fn to_canonical(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_formats_yield_the_same_date() {
        let expected = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
        assert_eq!(parse_flexible("2023-02-01"), Some(expected));
        assert_eq!(parse_flexible("01/02/2023"), Some(expected));
        assert_eq!(parse_flexible("1/2/2023"), Some(expected));
    }

    #[test]
    fn day_first_is_not_confused_with_month_first() {
        // 15 cannot be a month, so a month-first reading would fail here.
        let date = parse_flexible("15/01/2023").unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2023-01-15");
    }

    #[test]
    fn unparseable_values_are_rejected() {
        assert_eq!(parse_flexible("yesterday"), None);
        assert_eq!(parse_flexible("2023/02/31"), None);
        assert_eq!(parse_flexible(""), None);
    }

    #[test]
    fn canonical_form_is_iso() {
        let date = parse_flexible("22/01/2023").unwrap();
        assert_eq!(to_canonical(date), "2023-01-22");
    }
}
