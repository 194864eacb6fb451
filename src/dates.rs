// src/dates.rs
//
// Calendar-date parsing for `target_date`. Ordering must compare dates,
// never strings: "01/02/2024" sorts after "12/31/2023".

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a date string in any of the accepted layouts.
/// Timestamps keep only their date part.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(d) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(d);
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.date());
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_common_layouts() {
        assert_eq!(parse_date("2024-01-02"), Some(ymd(2024, 1, 2)));
        assert_eq!(parse_date(" 2024/01/02 "), Some(ymd(2024, 1, 2)));
        assert_eq!(parse_date("01/02/2024"), Some(ymd(2024, 1, 2)));
        assert_eq!(parse_date("2 Jan 2024"), Some(ymd(2024, 1, 2)));
        assert_eq!(parse_date("Jan 2, 2024"), Some(ymd(2024, 1, 2)));
        assert_eq!(parse_date("2024-01-02 00:05:00"), Some(ymd(2024, 1, 2)));
        assert_eq!(parse_date("2024-01-02T23:00:00+00:00"), Some(ymd(2024, 1, 2)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("tomorrow"), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }
}
