//! Business-day SLA for marketplace order lines.
//!
//! An order placed at or before its platform's cutoff hour is due the same
//! calendar day; later orders are due the next business day. Due dates never
//! land on a weekend or holiday. The "today" reference is injected so the
//! label is reproducible in tests and in reports.

use chrono::{NaiveDate, NaiveDateTime};

use super::business_days::{add_business_days, diff_business_days, is_business_day};
use crate::enums::Platform;

/// Due date for an order placed at `order_dt` local time.
pub fn compute_due_date(platform: Platform, order_dt: NaiveDateTime) -> NaiveDate {
    let cutoff = order_dt
        .date()
        .and_hms_opt(platform.cutoff_hour(), 0, 0)
        .expect("cutoff hour is a valid time of day");

    let mut due = if order_dt <= cutoff {
        order_dt.date()
    } else {
        add_business_days(order_dt.date(), 1)
    };
    while !is_business_day(due) {
        due = add_business_days(due, 1);
    }
    due
}

/// SLA label for an order line, relative to `today`.
///
/// Returns one of:
/// - "เลยกำหนด (N วัน)" when the due date is N business days in the past
/// - "วันนี้" when due today
/// - "พรุ่งนี้" when due the next business day
/// - "อีก N วัน" when due further out
///
/// A missing order timestamp yields an empty label.
pub fn sla_text(platform: Platform, order_dt: Option<NaiveDateTime>, today: NaiveDate) -> String {
    let Some(order_dt) = order_dt else {
        return String::new();
    };

    let due = compute_due_date(platform, order_dt);
    let diff = diff_business_days(due, today);

    if diff > 0 {
        format!("เลยกำหนด ({} วัน)", diff)
    } else if diff == 0 {
        "วันนี้".to_string()
    } else if diff == -1 {
        "พรุ่งนี้".to_string()
    } else {
        format!("อีก {} วัน", -diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .expect("valid test datetime")
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid test date")
    }

    #[test]
    fn test_lazada_before_cutoff_due_same_day() {
        // Wednesday 10:30, Lazada cutoff is 11:00
        let order = dt(2025, 1, 8, 10, 30);
        assert_eq!(compute_due_date(Platform::Lazada, order), d(2025, 1, 8));
        assert_eq!(
            sla_text(Platform::Lazada, Some(order), d(2025, 1, 8)),
            "วันนี้"
        );
    }

    #[test]
    fn test_lazada_after_cutoff_due_next_business_day() {
        // 11:30 is past the Lazada cutoff but before everyone else's
        let order = dt(2025, 1, 8, 11, 30);
        assert_eq!(compute_due_date(Platform::Lazada, order), d(2025, 1, 9));
        assert_eq!(compute_due_date(Platform::Shopee, order), d(2025, 1, 8));
    }

    #[test]
    fn test_after_noon_cutoff_due_next_business_day() {
        // Wednesday 13:00, non-Lazada cutoff is 12:00
        let order = dt(2025, 1, 8, 13, 0);
        assert_eq!(compute_due_date(Platform::Shopee, order), d(2025, 1, 9));
    }

    #[test]
    fn test_friday_afternoon_due_monday() {
        let order = dt(2025, 1, 10, 15, 0);
        assert_eq!(compute_due_date(Platform::TikTok, order), d(2025, 1, 13));
    }

    #[test]
    fn test_weekend_order_never_due_on_weekend() {
        // Saturday morning order: same-day due rolls to Monday
        let order = dt(2025, 1, 11, 9, 0);
        let due = compute_due_date(Platform::Shopee, order);
        assert_eq!(due, d(2025, 1, 13));
        assert!(is_business_day(due));
    }

    #[test]
    fn test_labels() {
        let order = dt(2025, 1, 8, 10, 0);
        // due = 2025-01-08 (Wednesday)
        assert_eq!(
            sla_text(Platform::Shopee, Some(order), d(2025, 1, 10)),
            "เลยกำหนด (2 วัน)"
        );
        assert_eq!(
            sla_text(Platform::Shopee, Some(order), d(2025, 1, 8)),
            "วันนี้"
        );
        assert_eq!(
            sla_text(Platform::Shopee, Some(order), d(2025, 1, 7)),
            "พรุ่งนี้"
        );
        assert_eq!(
            sla_text(Platform::Shopee, Some(order), d(2025, 1, 3)),
            "อีก 3 วัน"
        );
    }

    #[test]
    fn test_missing_timestamp_gives_empty_label() {
        assert_eq!(sla_text(Platform::Lazada, None, d(2025, 1, 8)), "");
    }
}
