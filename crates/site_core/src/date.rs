use chrono::NaiveDate;

/// Long US-style date, e.g. `August 19, 2022`.
///
/// Content dates are literal strings; anything that is not `YYYY-MM-DD`
/// (such as `N/A`) is shown verbatim.
pub fn format_long_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_long_date;

    #[test]
    fn iso_dates_are_spelled_out() {
        assert_eq!(format_long_date("2022-08-19"), "August 19, 2022");
        assert_eq!(format_long_date("2024-03-01"), "March 1, 2024");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_long_date("N/A"), "N/A");
        assert_eq!(format_long_date(""), "");
    }
}
