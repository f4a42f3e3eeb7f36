use crate::dashboards::d400_store_overview::ui::StoreOverviewDashboard;
use crate::domain::a002_product::ui::list::ProductsPage;
use crate::domain::a003_order::ui::list::OrdersPage;
use crate::layout::global_context::{use_global_context, Page};
use leptos::prelude::*;

/// Renders the active page. Switching pages unmounts the previous one,
/// which invalidates its pending loads.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div data-zone="center" class="app-center">
            {move || match ctx.active.get() {
                Page::Dashboard => view! { <StoreOverviewDashboard /> }.into_any(),
                Page::Products => view! { <ProductsPage /> }.into_any(),
                Page::Orders => view! { <OrdersPage /> }.into_any(),
            }}
        </div>
    }
}
