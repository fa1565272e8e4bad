use serde::{Deserialize, Serialize};

/// Filter parameters the console forwards verbatim on row loading and bulk
/// actions. Keys are emitted in this fixed order, empty values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFilter {
    pub platform: String,
    pub shop_id: String,
    pub import_date: String,
    pub date_from: String,
    pub date_to: String,
    pub status: String,
}

impl OrderFilter {
    /// Non-empty filter fields as `(key, trimmed value)` pairs, fixed order
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("platform", &self.platform),
            ("shop_id", &self.shop_id),
            ("import_date", &self.import_date),
            ("date_from", &self.date_from),
            ("date_to", &self.date_to),
            ("status", &self.status),
        ]
        .into_iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .map(|(k, v)| (k, v.trim().to_string()))
        .collect()
    }

    /// Number of active (non-empty) filter fields
    pub fn active_count(&self) -> usize {
        self.to_query_pairs().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_has_no_pairs() {
        assert!(OrderFilter::default().to_query_pairs().is_empty());
        assert_eq!(OrderFilter::default().active_count(), 0);
    }

    #[test]
    fn test_only_non_empty_fields_in_fixed_order() {
        let filter = OrderFilter {
            platform: "Shopee".to_string(),
            shop_id: "  ".to_string(),
            import_date: String::new(),
            date_from: "2025-01-01".to_string(),
            date_to: String::new(),
            status: " READY_ACCEPT ".to_string(),
        };
        assert_eq!(
            filter.to_query_pairs(),
            vec![
                ("platform", "Shopee".to_string()),
                ("date_from", "2025-01-01".to_string()),
                ("status", "READY_ACCEPT".to_string()),
            ]
        );
        assert_eq!(filter.active_count(), 3);
    }
}
