pub mod api_utils;
pub mod bulk_submit;
pub mod collation;
pub mod components;
pub mod filter_state;
pub mod grouping;
pub mod icons;
pub mod list_utils;
pub mod selection;
