//! Parsing of the timestamps the backend sends.
//!
//! The server serializes SQL datetimes in whatever shape its JSON encoder
//! picks: RFC 2822 (`Tue, 15 Oct 2024 10:30:00 GMT`), RFC 3339, or a bare
//! `YYYY-MM-DD HH:MM:SS`. Naive values are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc2822_http_dates() {
        let dt = parse_datetime("Tue, 15 Oct 2024 10:30:00 GMT").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 10, 15));
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn parses_rfc3339_and_naive_forms() {
        assert!(parse_datetime("2024-03-15T14:02:26Z").is_some());
        assert!(parse_datetime("2024-03-15T14:02:26.123+03:00").is_some());
        assert!(parse_datetime("2024-03-15 14:02:26").is_some());
        assert_eq!(
            parse_datetime("2024-03-15").map(|d| d.day()),
            Some(15)
        );
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_datetime(""), None);
        assert_eq!(parse_datetime("yesterday"), None);
    }
}
