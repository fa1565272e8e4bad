use serde::{Deserialize, Serialize};

/// Stock/lifecycle status the allocation pass assigns to each order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStatus {
    /// Stock covers the line, ready to be accepted
    ReadyAccept,
    /// Stock covers the line but only 1-3 pieces remain
    LowStock,
    /// No stock at all
    Shortage,
    /// Some stock, less than the ordered quantity
    NotEnough,
    /// Accepted by a warehouse user
    Accepted,
    /// Sales document already opened for the full quantity
    Packed,
    /// Cancelled on the marketplace
    Cancelled,
}

impl AllocationStatus {
    /// Wire code as computed by the allocation pass
    pub fn code(&self) -> &'static str {
        match self {
            AllocationStatus::ReadyAccept => "READY_ACCEPT",
            AllocationStatus::LowStock => "LOW_STOCK",
            AllocationStatus::Shortage => "SHORTAGE",
            AllocationStatus::NotEnough => "NOT_ENOUGH",
            AllocationStatus::Accepted => "ACCEPTED",
            AllocationStatus::Packed => "PACKED",
            AllocationStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human-readable name shown in the status column and KPI bar
    pub fn display_name(&self) -> &'static str {
        match self {
            AllocationStatus::ReadyAccept => "พร้อมกดรับ",
            AllocationStatus::LowStock => "สินค้าน้อย (1-3 ชิ้น)",
            AllocationStatus::Shortage => "สินค้าหมด",
            AllocationStatus::NotEnough => "สต็อกไม่พอ",
            AllocationStatus::Accepted => "รับแล้ว",
            AllocationStatus::Packed => "เปิดใบขายแล้ว",
            AllocationStatus::Cancelled => "ยกเลิก",
        }
    }

    /// All statuses, in KPI-bar order
    pub fn all() -> Vec<AllocationStatus> {
        vec![
            AllocationStatus::ReadyAccept,
            AllocationStatus::LowStock,
            AllocationStatus::Shortage,
            AllocationStatus::NotEnough,
            AllocationStatus::Accepted,
            AllocationStatus::Packed,
            AllocationStatus::Cancelled,
        ]
    }

    /// Parse a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "READY_ACCEPT" => Some(AllocationStatus::ReadyAccept),
            "LOW_STOCK" => Some(AllocationStatus::LowStock),
            "SHORTAGE" => Some(AllocationStatus::Shortage),
            "NOT_ENOUGH" => Some(AllocationStatus::NotEnough),
            "ACCEPTED" => Some(AllocationStatus::Accepted),
            "PACKED" => Some(AllocationStatus::Packed),
            "CANCELLED" => Some(AllocationStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for status in AllocationStatus::all() {
            assert_eq!(AllocationStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(AllocationStatus::from_code("REFUNDED"), None);
        assert_eq!(AllocationStatus::from_code(""), None);
    }
}
