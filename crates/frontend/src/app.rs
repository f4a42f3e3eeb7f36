use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::notify::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state for the whole app.
    provide_context(AppGlobalContext::new());

    // Success/error banners shared by every page.
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <NotificationHost />
            <Shell />
        </ConfigProvider>
    }
}
