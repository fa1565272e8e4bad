//! TopHeader component - application top bar.
//!
//! Carries the console title and the realtime Buddhist-era clock.

use crate::layout::clock::ThaiClock;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"ระบบจัดการออเดอร์"</span>
            </div>
            <div class="top-header__actions">
                <ThaiClock />
            </div>
        </div>
    }
}
