use contracts::domain::a002_product::Product;
use contracts::domain::a003_order::Order;
use contracts::shared::search::filter_items;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct OrdersState {
    pub orders: Vec<Order>,
    /// Product catalogue for the create modal's selects.
    pub products: Vec<Product>,
    pub search_query: String,
    pub is_loaded: bool,
}

impl OrdersState {
    pub fn visible_orders(&self) -> Vec<Order> {
        filter_items(&self.orders, &self.search_query)
    }
}

pub fn create_state() -> RwSignal<OrdersState> {
    RwSignal::new(OrdersState::default())
}
