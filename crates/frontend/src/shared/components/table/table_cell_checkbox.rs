//! Checkbox cell for selecting a single table row
//!
//! # Examples
//!
//! ```rust,ignore
//! <TableCellCheckbox
//!     item_id=row.id.clone()
//!     selection=selection_signal
//!     on_change=Callback::new(move |(id, checked)| {
//!         toggle_selection(id, checked);
//!     })
//! />
//! ```

use crate::shared::selection::SelectionTracker;
use leptos::prelude::*;
use thaw::*;

/// Checkbox cell bound to the page's selection tracker
///
/// Automatically:
/// - Derives its checked state from the tracker (so it survives redraws)
/// - Stops click propagation (a row click must not fire)
/// - Reports `(item_id, checked)` on change
#[component]
pub fn TableCellCheckbox(
    /// Id of the row this cell belongs to
    #[prop(into)]
    item_id: String,

    /// Selection tracker for the page
    #[prop(into)]
    selection: Signal<SelectionTracker>,

    /// Callback on change: (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_checked = item_id.clone();
    let item_id_for_change = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selection.get().contains(&item_id_for_checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id_for_change.clone(), checked));
                }
            />
        </TableCell>
    }
}
