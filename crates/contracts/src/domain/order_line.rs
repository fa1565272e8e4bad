use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::{AllocationStatus, Platform};
use crate::shared::thai_time::parse_order_time;

/// One marketplace order line as the server serves it to the console.
///
/// `platform` and `allocation_status` stay raw strings on the wire; the
/// typed accessors below normalize them where the console needs semantics
/// (SLA cutoff, bulk-accept guard) while the table still shows the raw
/// value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineDto {
    pub id: String,
    pub platform: String,
    pub shop_name: String,
    pub order_id: String,
    pub sku: String,
    pub item_name: String,
    pub qty: i64,
    pub order_time: Option<String>,
    pub logistic_type: Option<String>,
    pub import_date: Option<String>,
    pub allocation_status: String,
}

impl OrderLineDto {
    /// Normalized platform, for cutoff lookups
    pub fn platform_kind(&self) -> Platform {
        Platform::normalize(&self.platform)
    }

    /// Parsed allocation status; `None` for codes this console does not know
    pub fn status(&self) -> Option<AllocationStatus> {
        AllocationStatus::from_code(self.allocation_status.trim())
    }

    /// Parsed order timestamp; `None` when absent or malformed
    pub fn order_dt(&self) -> Option<NaiveDateTime> {
        self.order_time.as_deref().and_then(parse_order_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> OrderLineDto {
        OrderLineDto {
            id: "1001".to_string(),
            platform: "shoppee".to_string(),
            shop_name: "ร้านหลัก".to_string(),
            order_id: "250108ABCDEF".to_string(),
            sku: "SKU-001".to_string(),
            item_name: "เสื้อยืด".to_string(),
            qty: 2,
            order_time: Some("2025-01-08T10:30:00".to_string()),
            logistic_type: Some("Standard".to_string()),
            import_date: Some("2025-01-08".to_string()),
            allocation_status: "LOW_STOCK".to_string(),
        }
    }

    #[test]
    fn test_typed_accessors() {
        let l = line();
        assert_eq!(l.platform_kind(), Platform::Shopee);
        assert_eq!(l.status(), Some(AllocationStatus::LowStock));
        assert!(l.order_dt().is_some());
    }

    #[test]
    fn test_malformed_fields_degrade_to_none() {
        let mut l = line();
        l.allocation_status = "???".to_string();
        l.order_time = Some("yesterday".to_string());
        assert_eq!(l.status(), None);
        assert_eq!(l.order_dt(), None);
    }
}
