use super::COLUMNS;
use contracts::domain::{OrderFilter, OrderLineDto};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrdersState {
    /// Rows of the currently rendered page (after filter/sort/slice)
    pub items: Vec<OrderLineDto>,
    /// Order-number cell class per rendered row (group framing)
    pub group_classes: Vec<String>,
    /// Server-side filter parameters, forwarded on loading and bulk actions
    pub filter: OrderFilter,
    /// Per-column search text, one entry per data column
    pub column_filters: Vec<String>,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub is_loaded: bool,
}

impl Default for OrdersState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            group_classes: Vec::new(),
            filter: OrderFilter::default(),
            column_filters: vec![String::new(); COLUMNS.len()],
            sort_field: "order_time".to_string(),
            sort_ascending: true,
            page: 0,
            page_size: 50,
            total_count: 0,
            total_pages: 0,
            is_loaded: false,
        }
    }
}

/// Create state signal
pub fn create_state() -> RwSignal<OrdersState> {
    RwSignal::new(OrdersState::default())
}
