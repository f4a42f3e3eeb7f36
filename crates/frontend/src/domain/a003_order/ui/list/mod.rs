pub mod state;

use self::state::create_state;
use crate::domain::a002_product::api as product_api;
use crate::domain::a003_order::api;
use crate::domain::a003_order::ui::create::{CreateOrderModal, CreateOrderViewModel};
use crate::domain::a003_order::ui::details::OrderDetailsModal;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_action, SearchInput};
use crate::shared::load_guard::LoadGuard;
use crate::shared::notify::use_notifications;
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_order::{Order, OrderId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let state = create_state();
    let notifications = use_notifications();
    let orders_guard = LoadGuard::new();
    let details_guard = LoadGuard::new();
    let (loading, set_loading) = signal(false);
    let create_vm = CreateOrderViewModel::new();
    let show_create = RwSignal::new(false);
    let details = RwSignal::new(None::<Order>);

    // Orders plus the product catalogue for the create modal.
    let load_all = move || {
        let ticket = orders_guard.begin();
        set_loading.set(true);
        spawn_local(async move {
            let (orders, products) = futures::join!(api::list(), product_api::list());
            let _ = set_loading.try_set(false);
            if !orders_guard.is_current(ticket) {
                return;
            }
            match (orders, products) {
                (Ok(orders), Ok(products)) => {
                    log::debug!("loaded {} orders, {} products", orders.len(), products.len());
                    state.update(|s| {
                        s.orders = orders;
                        s.products = products;
                        s.is_loaded = true;
                    });
                }
                (Err(e), _) | (_, Err(e)) => {
                    notifications.error(format!("Failed to load page data: {}", e));
                }
            }
        });
    };

    let load_orders = move || {
        let ticket = orders_guard.begin();
        spawn_local(async move {
            let result = api::list().await;
            if !orders_guard.is_current(ticket) {
                return;
            }
            match result {
                Ok(orders) => state.update(|s| s.orders = orders),
                Err(e) => notifications.error(format!("Failed to load orders: {}", e)),
            }
        });
    };

    let open_create = move || {
        create_vm.reset();
        show_create.set(true);
    };

    let view_order = move |id: OrderId| {
        let ticket = details_guard.begin();
        spawn_local(async move {
            let result = api::get_by_id(id).await;
            if !details_guard.is_current(ticket) {
                return;
            }
            match result {
                Ok(order) => details.set(Some(order)),
                Err(e) => notifications.error(format!("Failed to load order details: {}", e)),
            }
        });
    };

    let delete_order = move |id: OrderId| {
        if !confirm_action("Are you sure you want to delete this order?") {
            return;
        }
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => {
                    log::info!("Order {} deleted", id);
                    notifications.success("Order deleted successfully!");
                    load_orders();
                }
                Err(e) => notifications.error(format!("Failed to delete order: {}", e)),
            }
        });
    };

    load_all();

    view! {
        <PageFrame page_id="a003_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders">
                <SearchInput
                    id="search-orders"
                    placeholder="Search by customer..."
                    value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                    on_change=Callback::new(move |q: String| state.update(|s| s.search_query = q))
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_create()
                >
                    {icon("plus")}
                    " Create Order"
                </Button>
            </PageHeader>

            <Show when=move || loading.get()>
                <div id="loading" class="page__loading"><Spinner /></div>
            </Show>

            <Show when=move || state.with(|s| s.is_loaded)>
                <div id="orders-section" class="page__content">
                    <div id="orders-table" class="table">
                        {move || {
                            let rows = state.with(|s| s.visible_orders());
                            if rows.is_empty() {
                                view! { <p class="no-data">"No orders found."</p> }.into_any()
                            } else {
                                view! {
                                    <table class="table__data table--striped">
                                        <thead class="table__head">
                                            <tr>
                                                <th class="table__header-cell">"Order ID"</th>
                                                <th class="table__header-cell">"Customer Name"</th>
                                                <th class="table__header-cell">"Date"</th>
                                                <th class="table__header-cell">"Total Amount"</th>
                                                <th class="table__header-cell">"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows.into_iter().map(|order| {
                                                let id = order.id;
                                                view! {
                                                    <tr class="table__row">
                                                        <td class="table__cell">{format!("#{}", id)}</td>
                                                        <td class="table__cell">{order.customer_name}</td>
                                                        <td class="table__cell">{format_date(&order.datetime)}</td>
                                                        <td class="table__cell">{format_currency(order.total_price)}</td>
                                                        <td class="table__cell table__cell--actions">
                                                            <button
                                                                class="button button--small button--primary"
                                                                title="View"
                                                                on:click=move |_| view_order(id)
                                                            >
                                                                {icon("view")}
                                                            </button>
                                                            <button
                                                                class="button button--small button--danger"
                                                                title="Delete"
                                                                on:click=move |_| delete_order(id)
                                                            >
                                                                {icon("delete")}
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }).collect_view()}
                                        </tbody>
                                    </table>
                                }.into_any()
                            }
                        }}
                    </div>
                </div>
            </Show>

            <Show when=move || show_create.get()>
                <CreateOrderModal
                    vm=create_vm
                    products=Signal::derive(move || state.with(|s| s.products.clone()))
                    on_created=Callback::new(move |_| {
                        show_create.set(false);
                        load_orders();
                    })
                    on_cancel=Callback::new(move |_| show_create.set(false))
                />
            </Show>

            {move || details.get().map(|order| view! {
                <OrderDetailsModal
                    order=order
                    on_close=Callback::new(move |_| details.set(None))
                />
            })}
        </PageFrame>
    }
}
