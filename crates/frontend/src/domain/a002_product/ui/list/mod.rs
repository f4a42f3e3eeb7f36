pub mod state;

use self::state::create_state;
use crate::domain::a001_uom::api as uom_api;
use crate::domain::a001_uom::ui::UomPanel;
use crate::domain::a002_product::api;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_action, SearchInput};
use crate::shared::load_guard::LoadGuard;
use crate::shared::notify::use_notifications;
use crate::shared::number_format::format_currency;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Which product modal is open.
#[derive(Clone, Debug, PartialEq)]
enum ProductModal {
    Closed,
    Add,
    Edit(Product),
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = create_state();
    let notifications = use_notifications();
    let products_guard = LoadGuard::new();
    let uoms_guard = LoadGuard::new();
    let (loading, set_loading) = signal(false);
    let modal = RwSignal::new(ProductModal::Closed);

    // Products and UOMs together; both must arrive for the page to show.
    let load_all = move || {
        let products_ticket = products_guard.begin();
        let uoms_ticket = uoms_guard.begin();
        set_loading.set(true);
        spawn_local(async move {
            let (products, uoms) = futures::join!(api::list(), uom_api::list());
            let _ = set_loading.try_set(false);
            if !products_guard.is_current(products_ticket) || !uoms_guard.is_current(uoms_ticket) {
                return;
            }
            match (products, uoms) {
                (Ok(products), Ok(uoms)) => {
                    log::debug!("loaded {} products, {} uoms", products.len(), uoms.len());
                    state.update(|s| {
                        s.products = products;
                        s.uoms = uoms;
                        s.is_loaded = true;
                    });
                }
                (Err(e), _) | (_, Err(e)) => {
                    notifications.error(format!("Failed to load page data: {}", e));
                }
            }
        });
    };

    let load_products = move || {
        let ticket = products_guard.begin();
        spawn_local(async move {
            let result = api::list().await;
            if !products_guard.is_current(ticket) {
                return;
            }
            match result {
                Ok(products) => state.update(|s| s.products = products),
                Err(e) => notifications.error(format!("Failed to load products: {}", e)),
            }
        });
    };

    let load_uoms = move || {
        let ticket = uoms_guard.begin();
        spawn_local(async move {
            let result = uom_api::list().await;
            if !uoms_guard.is_current(ticket) {
                return;
            }
            match result {
                Ok(uoms) => state.update(|s| s.uoms = uoms),
                Err(e) => notifications.error(format!("Failed to load UOMs: {}", e)),
            }
        });
    };

    let delete_product = move |product: Product| {
        if !confirm_action("Are you sure you want to delete this product?") {
            return;
        }
        spawn_local(async move {
            match api::delete(product.id).await {
                Ok(()) => {
                    log::info!("Product {} deleted", product.id);
                    notifications.success("Product deleted successfully!");
                    load_products();
                }
                Err(e) => notifications.error(format!("Failed to delete product: {}", e)),
            }
        });
    };

    load_all();

    let uoms = Signal::derive(move || state.with(|s| s.uoms.clone()));

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Products">
                <SearchInput
                    id="search-products"
                    placeholder="Search products..."
                    value=Signal::derive(move || state.with(|s| s.search_query.clone()))
                    on_change=Callback::new(move |q: String| state.update(|s| s.search_query = q))
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| modal.set(ProductModal::Add)
                >
                    {icon("plus")}
                    " Add Product"
                </Button>
            </PageHeader>

            <Show when=move || loading.get()>
                <div id="loading" class="page__loading"><Spinner /></div>
            </Show>

            <Show when=move || state.with(|s| s.is_loaded)>
                <div id="products-section" class="page__content">
                    <div id="products-table" class="table">
                        {move || {
                            let rows = state.with(|s| s.visible_products());
                            if rows.is_empty() {
                                view! { <p class="no-data">"No products found."</p> }.into_any()
                            } else {
                                view! {
                                    <table class="table__data table--striped">
                                        <thead class="table__head">
                                            <tr>
                                                <th class="table__header-cell">"ID"</th>
                                                <th class="table__header-cell">"Product Name"</th>
                                                <th class="table__header-cell">"Price per Unit"</th>
                                                <th class="table__header-cell">"UOM"</th>
                                                <th class="table__header-cell">"Actions"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {rows.into_iter().map(|product| {
                                                let for_edit = product.clone();
                                                let for_delete = product.clone();
                                                view! {
                                                    <tr class="table__row">
                                                        <td class="table__cell">{product.id.value()}</td>
                                                        <td class="table__cell">{product.name}</td>
                                                        <td class="table__cell">{format_currency(product.price_per_unit)}</td>
                                                        <td class="table__cell">{product.uom_name}</td>
                                                        <td class="table__cell table__cell--actions">
                                                            <button
                                                                class="button button--small button--secondary"
                                                                title="Edit"
                                                                on:click=move |_| modal.set(ProductModal::Edit(for_edit.clone()))
                                                            >
                                                                {icon("edit")}
                                                            </button>
                                                            <button
                                                                class="button button--small button--danger"
                                                                title="Delete"
                                                                on:click=move |_| delete_product(for_delete.clone())
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

                    <UomPanel uoms=uoms on_changed=Callback::new(move |_| load_uoms()) />
                </div>
            </Show>

            {move || {
                let existing = match modal.get() {
                    ProductModal::Closed => return None,
                    ProductModal::Add => None,
                    ProductModal::Edit(product) => Some(product),
                };
                Some(view! {
                    <ProductDetails
                        existing=existing
                        uoms=uoms
                        on_saved=Callback::new(move |_| {
                            modal.set(ProductModal::Closed);
                            load_products();
                        })
                        on_cancel=Callback::new(move |_| modal.set(ProductModal::Closed))
                    />
                })
            }}
        </PageFrame>
    }
}
