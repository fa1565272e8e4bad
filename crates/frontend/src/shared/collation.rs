//! Thai-locale string comparison for table ordering.
//!
//! Cell values are normalized (HTML stripped, trimmed, lowercased) and then
//! compared with `Intl.Collator("th")`, so Thai text orders the way users
//! expect instead of by code point. Both sort directions go through the
//! same comparator. On non-wasm targets (unit tests) a plain ordering
//! stands in for the collator.

use std::cmp::Ordering;

/// Normalize a rendered cell value before comparison: strip HTML tags,
/// trim, lowercase. A bare "-" placeholder counts as empty.
pub fn normalize_cell(raw: &str) -> String {
    if raw.is_empty() || raw == "-" {
        return String::new();
    }
    let mut text = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.trim().to_lowercase()
}

/// Locale-aware comparison of two cell values.
pub fn compare(a: &str, b: &str) -> Ordering {
    compare_normalized(&normalize_cell(a), &normalize_cell(b))
}

#[cfg(target_arch = "wasm32")]
fn compare_normalized(a: &str, b: &str) -> Ordering {
    use wasm_bindgen::JsValue;

    thread_local! {
        static COLLATOR: js_sys::Intl::Collator = js_sys::Intl::Collator::new(
            &js_sys::Array::of1(&JsValue::from_str("th")),
            &js_sys::Object::new(),
        );
    }

    let result = COLLATOR.with(|collator| {
        collator
            .compare()
            .call2(&JsValue::NULL, &JsValue::from_str(a), &JsValue::from_str(b))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    });

    if result < 0.0 {
        Ordering::Less
    } else if result > 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn compare_normalized(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_html() {
        assert_eq!(normalize_cell("<b>ABC</b>"), "abc");
        assert_eq!(
            normalize_cell("<span class=\"badge\">รับแล้ว</span>"),
            "รับแล้ว"
        );
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_cell("  SKU-001  "), "sku-001");
    }

    #[test]
    fn test_placeholder_is_empty() {
        assert_eq!(normalize_cell("-"), "");
        assert_eq!(normalize_cell(""), "");
    }

    #[test]
    fn test_compare_ignores_markup() {
        assert_eq!(compare("<i>abc</i>", "ABC"), Ordering::Equal);
        assert_eq!(compare("a", "b"), Ordering::Less);
        assert_eq!(compare("b", "a"), Ordering::Greater);
    }
}
