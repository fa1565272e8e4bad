//! Persistence of the table's filter state in localStorage.
//!
//! Mirrors the grid's own state saving: whatever the user typed into the
//! header filter row survives a reload and is restored into the inputs on
//! startup.

use serde::{Deserialize, Serialize};
use web_sys::window;

const TABLE_STATE_KEY: &str = "orders_table_state";

/// Saved portion of the table state. Only the per-column search text is
/// kept here; sort order and page position reset on reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedTableState {
    column_filters: Vec<String>,
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the per-column filter texts (one entry per column, blanks included)
pub fn save_column_filters(filters: &[String]) {
    let Some(storage) = local_storage() else {
        return;
    };
    let state = SavedTableState {
        column_filters: filters.to_vec(),
    };
    if let Ok(json) = serde_json::to_string(&state) {
        let _ = storage.set_item(TABLE_STATE_KEY, &json);
    }
}

/// Restore the per-column filter texts saved by a previous session
pub fn load_column_filters() -> Option<Vec<String>> {
    let json = local_storage()?.get_item(TABLE_STATE_KEY).ok()??;
    serde_json::from_str::<SavedTableState>(&json)
        .ok()
        .map(|state| state.column_filters)
}

/// Drop the persisted filter state (the "clear filters" button)
pub fn clear_column_filters() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TABLE_STATE_KEY);
    }
}
