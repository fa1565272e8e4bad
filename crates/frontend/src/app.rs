use crate::domain::orders::ui::list::OrdersList;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell center=|| view! { <OrdersList /> }.into_any() />
    }
}
