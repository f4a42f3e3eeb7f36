pub mod summary;

pub use summary::{
    recent_orders, top_products, total_revenue, StoreOverview, PRODUCTS_SUMMARY_LIMIT,
    RECENT_ORDERS_LIMIT,
};
