use chrono::NaiveDate;

/// Today according to the process's local clock; this is the date every
/// mark and report defaults to.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    // chrono accepts unpadded month/day; the records and reports only ever
    // carry the zero-padded shape, so hold inputs to it as well
    if d.format("%Y-%m-%d").to_string() == s {
        Some(d)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert!(parse_date("2025-09-01").is_some());
        assert!(parse_date("01-09-2025").is_none());
        assert!(parse_date("today").is_none());
    }

    #[test]
    fn rejects_unpadded_month_and_day() {
        assert!(parse_date("2025-9-1").is_none());
        assert!(parse_date("2025-09-1").is_none());
        assert!(parse_date("2025-9-01").is_none());
    }
}
