//! Header checkbox for selecting every row on the current page
//!
//! # Examples
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     items=page_rows
//!     selection=selection_signal
//!     get_id=Callback::new(|row: MyRow| row.id.clone())
//!     on_change=Callback::new(move |check_all: bool| {
//!         set_all_on_page(check_all);
//!     })
//! />
//! ```

use crate::shared::selection::SelectionTracker;
use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Header checkbox bound to the page's selection tracker
///
/// Automatically:
/// - Shows three states: unchecked, checked, indeterminate
/// - Checked means every row currently visible is selected
/// - Reports the new value on change; its own event never reaches the
///   per-row handlers
#[component]
pub fn TableHeaderCheckbox<T>(
    /// Rows on the current page
    #[prop(into)]
    items: Signal<Vec<T>>,

    /// Selection tracker for the page
    #[prop(into)]
    selection: Signal<SelectionTracker>,

    /// Extracts the row id from an item
    get_id: Callback<T, String>,

    /// Callback on change (true = select all, false = clear all)
    on_change: Callback<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let checkbox_state = Signal::derive(move || {
        let current_items = items.get();
        let tracker = selection.get();

        if current_items.is_empty() {
            return CheckboxState::Unchecked;
        }

        let selected_count = current_items
            .iter()
            .filter(|item| tracker.contains(&get_id.run((*item).clone())))
            .count();

        if selected_count == 0 {
            CheckboxState::Unchecked
        } else if selected_count == current_items.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate state only exists as a DOM property
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| {
                    ev.stop_propagation();
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
