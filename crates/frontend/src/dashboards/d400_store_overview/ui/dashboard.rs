use crate::dashboards::d400_store_overview::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::load_guard::LoadGuard;
use crate::shared::notify::use_notifications;
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_store_overview::StoreOverview;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Store overview: totals, latest orders and the product list head.
#[component]
pub fn StoreOverviewDashboard() -> impl IntoView {
    let notifications = use_notifications();
    let guard = LoadGuard::new();
    let (data, set_data) = signal(None::<StoreOverview>);
    let (loading, set_loading) = signal(false);

    let load = move || {
        let ticket = guard.begin();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::load_overview().await;
            let _ = set_loading.try_set(false);
            if !guard.is_current(ticket) {
                return;
            }
            match result {
                Ok(overview) => {
                    log::debug!(
                        "overview: {} products, {} orders, {} uoms",
                        overview.total_products,
                        overview.total_orders,
                        overview.total_uoms
                    );
                    set_data.set(Some(overview));
                }
                Err(e) => {
                    notifications.error(format!("Failed to load dashboard data: {}", e));
                }
            }
        });
    };

    load();

    let stat = move |f: fn(&StoreOverview) -> String| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };

    view! {
        <PageFrame page_id="d400_store_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
            </PageHeader>

            <Show when=move || loading.get()>
                <div id="loading" class="page__loading"><Spinner /></div>
            </Show>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label="Total Products"
                        icon_name="products"
                        value=stat(|d| d.total_products.to_string())
                    />
                    <StatCard
                        label="Total Orders"
                        icon_name="orders"
                        value=stat(|d| d.total_orders.to_string())
                    />
                    <StatCard
                        label="Total Revenue"
                        icon_name="revenue"
                        variant="revenue"
                        value=stat(|d| format_currency(d.total_revenue))
                    />
                    <StatCard
                        label="Units of Measure"
                        icon_name="uom"
                        value=stat(|d| d.total_uoms.to_string())
                    />
                </div>

                <div class="dashboard-section">
                    <h2 class="section__title">"Recent Orders"</h2>
                    <div id="recent-orders" class="table">
                        {move || data.with(|d| d.as_ref().map(|d| d.recent_orders.clone())).map(|orders| {
                            if orders.is_empty() {
                                view! { <p class="no-data">"No orders found."</p> }.into_any()
                            } else {
                                view! {
                                    <table class="table__data table--striped">
                                        <thead class="table__head">
                                            <tr>
                                                <th class="table__header-cell">"Order ID"</th>
                                                <th class="table__header-cell">"Customer"</th>
                                                <th class="table__header-cell">"Date"</th>
                                                <th class="table__header-cell">"Total"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {orders.into_iter().map(|order| view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{format!("#{}", order.id)}</td>
                                                    <td class="table__cell">{order.customer_name}</td>
                                                    <td class="table__cell">{format_date(&order.datetime)}</td>
                                                    <td class="table__cell">{format_currency(order.total_price)}</td>
                                                </tr>
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                }.into_any()
                            }
                        })}
                    </div>
                </div>

                <div class="dashboard-section">
                    <h2 class="section__title">"Products"</h2>
                    <div id="products-summary" class="table">
                        {move || data.with(|d| d.as_ref().map(|d| d.top_products.clone())).map(|products| {
                            if products.is_empty() {
                                view! { <p class="no-data">"No products found."</p> }.into_any()
                            } else {
                                view! {
                                    <table class="table__data table--striped">
                                        <thead class="table__head">
                                            <tr>
                                                <th class="table__header-cell">"Product"</th>
                                                <th class="table__header-cell">"Price per Unit"</th>
                                                <th class="table__header-cell">"UOM"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {products.into_iter().map(|product| view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{product.name}</td>
                                                    <td class="table__cell">{format_currency(product.price_per_unit)}</td>
                                                    <td class="table__cell">{product.uom_name}</td>
                                                </tr>
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                }.into_any()
                            }
                        })}
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
