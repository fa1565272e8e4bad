//! Shared helpers for sortable list pages
use std::cmp::Ordering;

/// Trait for row types that can be sorted by a named column
pub trait Sortable {
    /// Compare two rows by the given column key
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for a column header's sort indicator
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("qty", "qty", true), " ▲");
        assert_eq!(get_sort_indicator("qty", "qty", false), " ▼");
        assert_eq!(get_sort_indicator("qty", "sku", true), " ⇅");
    }
}
