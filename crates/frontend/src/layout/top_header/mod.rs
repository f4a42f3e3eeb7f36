//! TopHeader: sidebar toggle, application title and backend status.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::health::{self, BackendStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let status = RwSignal::new(BackendStatus::Checking);

    let check = move || {
        status.set(BackendStatus::Checking);
        spawn_local(async move {
            let result = health::check().await;
            let _ = status.try_set(result);
        });
    };
    check();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Grocery Store"</span>
            </div>

            <div class="top-header__actions">
                <button
                    id="health-status"
                    class="top-header__status"
                    title=move || status.get().label()
                    on:click=move |_| check()
                >
                    <span class=move || format!("status-dot status-dot--{}", status.get().css_modifier())></span>
                    <span class="top-header__status-text">{move || status.get().label()}</span>
                </button>
            </div>
        </div>
    }
}
