/// Utilities for date formatting
///
/// Server dates arrive in several shapes (RFC 2822 from the default JSON
/// encoder, ISO 8601, or plain `YYYY-MM-DD HH:MM:SS`), so everything goes
/// through `parse_datetime` first.
use contracts::shared::datetime::parse_datetime;

/// Format a server date as DD/MM/YYYY
/// Example: "2024-03-15T14:02:26Z" -> "15/03/2024"
///
/// Unparseable input is returned unchanged.
pub fn format_date(datetime_str: &str) -> String {
    match parse_datetime(datetime_str) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => datetime_str.to_string(),
    }
}

/// Format a server date as DD/MM/YYYY HH:MM
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_datetime(datetime_str) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => datetime_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("Fri, 15 Mar 2024 14:02:26 GMT"), "15/03/2024");
        assert_eq!(format_date("2024-03-15 14:02:26"), "15/03/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
    }
}
