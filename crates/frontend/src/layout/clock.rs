//! Realtime clock in the Thai Buddhist-era convention.

use chrono::Local;
use contracts::shared::thai_time::to_thai_be;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Current local time, re-rendered once per second as
/// `DD/MM/<BE year> HH:MM`. The tick is spawned once and runs for the
/// page's lifetime.
#[component]
pub fn ThaiClock() -> impl IntoView {
    let (now_text, set_now_text) = signal(to_thai_be(Local::now().naive_local()));

    let started = StoredValue::new(false);
    Effect::new(move |_| {
        if started.get_value() {
            return;
        }
        started.set_value(true);
        spawn_local(async move {
            loop {
                TimeoutFuture::new(1000).await;
                set_now_text.set(to_thai_be(Local::now().naive_local()));
            }
        });
    });

    view! {
        <span class="top-header__clock">{move || now_text.get()}</span>
    }
}
