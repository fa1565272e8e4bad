//! Thai Buddhist-era date/time formatting and order-timestamp parsing.
//!
//! The UI shows all dates in the Buddhist-era convention (Gregorian year
//! plus 543), day first, zero-padded.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Offset between the Gregorian and the Buddhist-era calendar year
pub const BE_YEAR_OFFSET: i32 = 543;

/// Format a local datetime as `DD/MM/<BE year> HH:MM`
/// Example: 2025-03-15 14:02 -> "15/03/2568 14:02"
pub fn to_thai_be(dt: NaiveDateTime) -> String {
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}",
        dt.day(),
        dt.month(),
        dt.year() + BE_YEAR_OFFSET,
        dt.hour(),
        dt.minute()
    )
}

/// Format a date as `DD/MM/<BE year>`
pub fn to_be_date_str(d: NaiveDate) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        d.day(),
        d.month(),
        d.year() + BE_YEAR_OFFSET
    )
}

/// Parse an order timestamp as the server serializes it.
///
/// Accepts RFC 3339 (with or without fractional seconds), the common
/// `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM[:SS]` shapes, and a bare date
/// (treated as midnight). Returns `None` for anything else; callers render
/// an empty SLA label in that case.
pub fn parse_order_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_thai_be() {
        let dt = NaiveDate::from_ymd_opt(2025, 3, 15)
            .and_then(|d| d.and_hms_opt(14, 2, 26))
            .expect("valid test datetime");
        assert_eq!(to_thai_be(dt), "15/03/2568 14:02");
    }

    #[test]
    fn test_to_thai_be_zero_padding() {
        let dt = NaiveDate::from_ymd_opt(2025, 1, 5)
            .and_then(|d| d.and_hms_opt(7, 4, 0))
            .expect("valid test datetime");
        assert_eq!(to_thai_be(dt), "05/01/2568 07:04");
    }

    #[test]
    fn test_to_be_date_str() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid test date");
        assert_eq!(to_be_date_str(d), "31/12/2567");
    }

    #[test]
    fn test_parse_order_time_shapes() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 8)
            .and_then(|d| d.and_hms_opt(13, 5, 0))
            .expect("valid test datetime");
        assert_eq!(parse_order_time("2025-01-08T13:05:00"), Some(expected));
        assert_eq!(parse_order_time("2025-01-08 13:05:00"), Some(expected));
        assert_eq!(parse_order_time("2025-01-08 13:05"), Some(expected));
        assert_eq!(parse_order_time("2025-01-08T13:05:00+07:00"), Some(expected));
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 8)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid test datetime");
        assert_eq!(parse_order_time("2025-01-08"), Some(expected));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_order_time(""), None);
        assert_eq!(parse_order_time("   "), None);
        assert_eq!(parse_order_time("not a date"), None);
        assert_eq!(parse_order_time("08/01/2568"), None);
    }
}
