//! Business-day arithmetic for SLA due dates.
//!
//! Saturday and Sunday are non-business days. The Thai holiday set is kept
//! empty until the warehouse confirms which public holidays they actually
//! skip; `is_holiday` is the single place to wire that in. The server runs
//! the same rules when it computes due dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Holiday calendar placeholder, always false for now
pub fn is_holiday(_d: NaiveDate) -> bool {
    false
}

pub fn is_business_day(d: NaiveDate) -> bool {
    !is_weekend(d) && !is_holiday(d)
}

/// Walk `n` business days from `d`; negative `n` walks backwards.
/// Weekends and holidays are stepped over without being counted.
pub fn add_business_days(d: NaiveDate, n: i64) -> NaiveDate {
    let step = if n >= 0 { 1 } else { -1 };
    let mut cur = d;
    let mut cnt: i64 = 0;
    while cnt != n {
        cur += Duration::days(step);
        if is_business_day(cur) {
            cnt += step;
        }
    }
    cur
}

/// Signed number of business days from `d1` to `d2` (zero when equal).
pub fn diff_business_days(d1: NaiveDate, d2: NaiveDate) -> i64 {
    if d1 == d2 {
        return 0;
    }
    let step = if d2 >= d1 { 1 } else { -1 };
    let mut cur = d1;
    let mut cnt: i64 = 0;
    while cur != d2 {
        cur += Duration::days(step);
        if is_business_day(cur) {
            cnt += step;
        }
    }
    cnt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
    }

    #[test]
    fn test_weekend_detection() {
        // 2025-01-06 is a Monday
        assert!(!is_weekend(d(2025, 1, 6)));
        assert!(!is_weekend(d(2025, 1, 10)));
        assert!(is_weekend(d(2025, 1, 11)));
        assert!(is_weekend(d(2025, 1, 12)));
    }

    #[test]
    fn test_add_skips_weekend() {
        // Friday + 1 business day = Monday
        assert_eq!(add_business_days(d(2025, 1, 10), 1), d(2025, 1, 13));
        // Monday - 1 business day = Friday
        assert_eq!(add_business_days(d(2025, 1, 13), -1), d(2025, 1, 10));
        // Saturday + 1 business day = Monday
        assert_eq!(add_business_days(d(2025, 1, 11), 1), d(2025, 1, 13));
    }

    #[test]
    fn test_add_multiple() {
        // Wednesday + 3 business days crosses the weekend
        assert_eq!(add_business_days(d(2025, 1, 8), 3), d(2025, 1, 13));
    }

    #[test]
    fn test_diff_zero_when_equal() {
        assert_eq!(diff_business_days(d(2025, 1, 8), d(2025, 1, 8)), 0);
    }

    #[test]
    fn test_diff_across_weekend() {
        // Friday -> Monday is one business day
        assert_eq!(diff_business_days(d(2025, 1, 10), d(2025, 1, 13)), 1);
        assert_eq!(diff_business_days(d(2025, 1, 6), d(2025, 1, 10)), 4);
    }

    #[test]
    fn test_diff_antisymmetric() {
        let pairs = [
            (d(2025, 1, 6), d(2025, 1, 10)),
            (d(2025, 1, 10), d(2025, 1, 13)),
            (d(2025, 1, 3), d(2025, 1, 20)),
            (d(2025, 1, 11), d(2025, 1, 12)),
        ];
        for (a, b) in pairs {
            assert_eq!(diff_business_days(a, b), -diff_business_days(b, a));
        }
    }
}
