pub mod clock;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell: top bar above the single content area.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div class="app-main">{center()}</div>
            </div>
        </div>
    }
}
