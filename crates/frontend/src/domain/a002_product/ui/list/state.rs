use contracts::domain::a001_uom::Uom;
use contracts::domain::a002_product::Product;
use contracts::shared::search::filter_items;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ProductsState {
    pub products: Vec<Product>,
    pub uoms: Vec<Uom>,
    pub search_query: String,
    /// Set once both collections arrived; content stays hidden until then.
    pub is_loaded: bool,
}

impl ProductsState {
    pub fn visible_products(&self) -> Vec<Product> {
        filter_items(&self.products, &self.search_query)
    }
}

pub fn create_state() -> RwSignal<ProductsState> {
    RwSignal::new(ProductsState::default())
}
