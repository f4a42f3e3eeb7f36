use super::view_model::CreateOrderViewModel;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::format_currency;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_order::LineId;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CreateOrderModal(
    vm: CreateOrderViewModel,
    #[prop(into)]
    products: Signal<Vec<Product>>,
    on_created: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let line_ids = move || vm.draft.with(|d| d.lines().iter().map(|l| l.id).collect::<Vec<_>>());

    view! {
        <ModalFrame id="order-modal" title="Create Order" on_close=on_cancel modal_class="order-modal">
            <form
                id="order-form"
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit_command(on_created);
                }
            >
                <div class="form-group">
                    <label for="customer-name">"Customer Name"</label>
                    <input
                        type="text"
                        id="customer-name"
                        prop:value=move || vm.draft.with(|d| d.customer_name.clone())
                        on:input=move |ev| vm.set_customer_name(event_target_value(&ev))
                    />
                </div>

                <div class="order-items__header">
                    <h4>"Order Items"</h4>
                    <Button
                        button_type=ButtonType::Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.add_item()
                    >
                        {icon("plus")}
                        " Add Item"
                    </Button>
                </div>

                <div id="order-items" class="order-items">
                    <For
                        each=line_ids
                        key=|id| *id
                        children=move |id| view! { <OrderLineRow vm=vm id=id products=products /> }
                    />
                </div>

                <div class="order-total">
                    <span class="order-total__label">"Total: "</span>
                    <span id="order-total" class="order-total__value">
                        {move || format_currency(vm.draft.with(|d| d.total()))}
                    </span>
                </div>

                <div class="details-actions">
                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || vm.submitting.get())
                    >
                        {icon("save")}
                        {move || if vm.submitting.get() { " Creating..." } else { " Create Order" }}
                    </Button>
                    <Button
                        button_type=ButtonType::Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                </div>
            </form>
        </ModalFrame>
    }
}

/// One editable line. The row stays mounted while its id is in the draft;
/// only the field values react to edits.
#[component]
fn OrderLineRow(
    vm: CreateOrderViewModel,
    id: LineId,
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    let quantity_input = move || {
        vm.draft
            .with(|d| d.line(id).map(|l| l.quantity_input.clone()))
            .unwrap_or_default()
    };
    let line_total = move || {
        let price = vm.draft.with(|d| d.line(id).map(|l| l.price)).unwrap_or(0.0);
        format_currency(price)
    };

    view! {
        <div class="order-item" data-line=id.as_string()>
            <div class="form-row">
                <div class="form-group">
                    <label>"Product"</label>
                    <select
                        class="product-select"
                        on:change=move |ev| {
                            let raw = event_target_value(&ev);
                            products.with_untracked(|list| vm.select_product(id, &raw, list));
                        }
                    >
                        {move || {
                            let selected = vm
                                .draft
                                .with_untracked(|d| d.line(id).and_then(|l| l.product_id));
                            let options = products.get().into_iter().map(|p| {
                                let label = p.option_label(&format_currency(p.price_per_unit));
                                view! {
                                    <option value=p.id.as_string() selected=selected == Some(p.id)>
                                        {label}
                                    </option>
                                }
                            }).collect_view();
                            view! {
                                <option value="" selected=selected.is_none()>"Select Product"</option>
                                {options}
                            }
                        }}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Quantity"</label>
                    <input
                        type="number"
                        class="quantity-input"
                        min="0"
                        step="0.01"
                        prop:value=quantity_input
                        on:input=move |ev| vm.set_quantity(id, &event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Total"</label>
                    <input type="text" class="item-total" readonly=true prop:value=line_total />
                </div>
                <div class="form-group">
                    <Button
                        button_type=ButtonType::Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.remove_item(id)
                    >
                        "Remove"
                    </Button>
                </div>
            </div>
        </div>
    }
}
