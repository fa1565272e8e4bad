//! Bulk accept/cancel submission.
//!
//! A bulk action is a navigating form POST, not a fetch: the server
//! processes the ids and renders the refreshed page itself. Request
//! construction is pure and tested; only the final form assembly touches
//! the DOM.

use contracts::domain::OrderFilter;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

/// Repeated form field carrying the selected row ids
pub const IDS_FIELD: &str = "order_line_ids[]";

/// Warning shown when a bulk action is invoked with nothing selected
pub const EMPTY_SELECTION_MSG: &str = "กรุณาเลือกรายการที่ต้องการกดรับ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Accept,
    Cancel,
}

impl BulkAction {
    pub fn url(&self) -> &'static str {
        match self {
            BulkAction::Accept => "/bulk_accept",
            BulkAction::Cancel => "/bulk_cancel",
        }
    }
}

/// A fully assembled bulk request: target URL (with the active filters as
/// query parameters) and the hidden form fields to post.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkRequest {
    pub url: String,
    pub fields: Vec<(String, String)>,
}

/// Build the request for a bulk action, or `None` when nothing is selected.
pub fn bulk_request(action_url: &str, ids: &[String], filter: &OrderFilter) -> Option<BulkRequest> {
    if ids.is_empty() {
        return None;
    }

    let qs = filter
        .to_query_pairs()
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
        .collect::<Vec<_>>()
        .join("&");
    let url = if qs.is_empty() {
        action_url.to_string()
    } else {
        format!("{}?{}", action_url, qs)
    };

    let fields = ids
        .iter()
        .map(|id| (IDS_FIELD.to_string(), id.clone()))
        .collect();

    Some(BulkRequest { url, fields })
}

/// Submit a bulk action as a hidden POST form (full page navigation).
/// An empty selection raises the blocking warning and sends nothing.
pub fn submit_bulk(action: BulkAction, ids: &[String], filter: &OrderFilter) {
    let Some(request) = bulk_request(action.url(), ids, filter) else {
        alert(EMPTY_SELECTION_MSG);
        return;
    };

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(form) = document
        .create_element("form")
        .map(|el| el.unchecked_into::<HtmlFormElement>())
    else {
        return;
    };
    form.set_method("POST");
    form.set_action(&request.url);

    for (name, value) in &request.fields {
        let Ok(input) = document
            .create_element("input")
            .map(|el| el.unchecked_into::<HtmlInputElement>())
        else {
            return;
        };
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        let _ = form.append_child(&input);
    }

    let Some(body) = document.body() else {
        return;
    };
    let _ = body.append_child(&form);
    let _ = form.submit();
}

/// Blocking alert dialog; a no-op outside a browsing context.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking confirm dialog; declines automatically outside a browsing
/// context.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_builds_nothing() {
        assert_eq!(
            bulk_request("/bulk_accept", &[], &OrderFilter::default()),
            None
        );
    }

    #[test]
    fn test_one_field_per_selected_id() {
        let request = bulk_request(
            "/bulk_accept",
            &ids(&["7", "12", "9"]),
            &OrderFilter::default(),
        )
        .expect("non-empty selection");
        assert_eq!(request.url, "/bulk_accept");
        assert_eq!(request.fields.len(), 3);
        assert!(request
            .fields
            .iter()
            .all(|(name, _)| name == "order_line_ids[]"));
    }

    #[test]
    fn test_only_non_empty_filters_forwarded() {
        let filter = OrderFilter {
            platform: "Shopee".to_string(),
            status: "READY_ACCEPT".to_string(),
            ..Default::default()
        };
        let request =
            bulk_request("/bulk_cancel", &ids(&["1"]), &filter).expect("non-empty selection");
        assert_eq!(request.url, "/bulk_cancel?platform=Shopee&status=READY_ACCEPT");
    }

    #[test]
    fn test_filter_values_are_encoded() {
        let filter = OrderFilter {
            platform: "อื่นๆ".to_string(),
            ..Default::default()
        };
        let request =
            bulk_request("/bulk_accept", &ids(&["1"]), &filter).expect("non-empty selection");
        assert!(request.url.starts_with("/bulk_accept?platform=%E0%B8"));
        assert!(!request.url.contains("อื่นๆ"));
    }
}
