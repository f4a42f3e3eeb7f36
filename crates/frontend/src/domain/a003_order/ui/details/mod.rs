use crate::shared::date_utils::format_date;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::{format_currency, format_quantity};
use contracts::domain::a003_order::Order;
use leptos::prelude::*;

/// Read-only view of one order with its persisted items.
#[component]
pub fn OrderDetailsModal(order: Order, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Order #{}", order.id);
    let items = order.order_items.clone();

    view! {
        <ModalFrame id="order-details-modal" title=title on_close=on_close modal_class="order-details-modal">
            <div id="order-details-content">
                <div class="order-info">
                    <div class="info-row">
                        <span class="label">"Order ID:"</span>
                        <span class="value">{format!("#{}", order.id)}</span>
                    </div>
                    <div class="info-row">
                        <span class="label">"Customer:"</span>
                        <span class="value">{order.customer_name.clone()}</span>
                    </div>
                    <div class="info-row">
                        <span class="label">"Date:"</span>
                        <span class="value">{format_date(&order.datetime)}</span>
                    </div>
                    <div class="info-row">
                        <span class="label">"Total Amount:"</span>
                        <span class="value">{format_currency(order.total_price)}</span>
                    </div>
                </div>

                <div class="order-items-section">
                    <h4>"Order Items"</h4>
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell">"Quantity"</th>
                                <th class="table__header-cell">"Price per Unit"</th>
                                <th class="table__header-cell">"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {items.into_iter().map(|item| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{item.product_name}</td>
                                    <td class="table__cell">
                                        {format!("{} {}", format_quantity(item.quantity), item.uom_name)}
                                    </td>
                                    <td class="table__cell">{format_currency(item.price_per_unit)}</td>
                                    <td class="table__cell">{format_currency(item.total_price)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </ModalFrame>
    }
}
