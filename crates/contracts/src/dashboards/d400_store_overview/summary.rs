use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::a001_uom::Uom;
use crate::domain::a002_product::Product;
use crate::domain::a003_order::Order;

/// Rows in the "Recent orders" table
pub const RECENT_ORDERS_LIMIT: usize = 5;
/// Rows in the "Products" summary table
pub const PRODUCTS_SUMMARY_LIMIT: usize = 10;

/// Everything the store overview dashboard renders, computed client-side
/// from the three full collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StoreOverview {
    pub total_products: usize,
    pub total_orders: usize,
    pub total_uoms: usize,
    pub total_revenue: f64,
    pub recent_orders: Vec<Order>,
    pub top_products: Vec<Product>,
}

impl StoreOverview {
    pub fn build(products: &[Product], orders: &[Order], uoms: &[Uom]) -> Self {
        Self {
            total_products: products.len(),
            total_orders: orders.len(),
            total_uoms: uoms.len(),
            total_revenue: total_revenue(orders),
            recent_orders: recent_orders(orders, RECENT_ORDERS_LIMIT),
            top_products: top_products(products, PRODUCTS_SUMMARY_LIMIT),
        }
    }
}

/// Sum of `total_price`; orders without a total contribute 0.
pub fn total_revenue(orders: &[Order]) -> f64 {
    orders
        .iter()
        .map(|o| {
            if o.total_price.is_finite() {
                o.total_price
            } else {
                0.0
            }
        })
        .sum()
}

/// Newest first, then the first `limit`.
///
/// Orders whose date cannot be parsed sort after every dated order.
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut sorted: Vec<(Option<chrono::DateTime<chrono::Utc>>, &Order)> =
        orders.iter().map(|o| (o.placed_at(), o)).collect();
    sorted.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
        .into_iter()
        .take(limit)
        .map(|(_, o)| o.clone())
        .collect()
}

/// Alphabetical by name (case-insensitive), then the first `limit`.
pub fn top_products(products: &[Product], limit: usize) -> Vec<Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    sorted.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_uom::UomId;
    use crate::domain::a002_product::ProductId;
    use crate::domain::a003_order::OrderId;
    use pretty_assertions::assert_eq;

    fn order(id: i64, datetime: &str, total: f64) -> Order {
        Order {
            id: OrderId(id),
            customer_name: format!("C{}", id),
            datetime: datetime.into(),
            total_price: total,
            order_items: vec![],
        }
    }

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.into(),
            price_per_unit: 1.0,
            uom_id: UomId(1),
            uom_name: "kg".into(),
        }
    }

    #[test]
    fn revenue_defaults_missing_totals_to_zero() {
        let orders: Vec<Order> = serde_json::from_str(
            r#"[
                {"id": 1, "customer_name": "A", "datetime": "", "total_price": 100.5},
                {"id": 2, "customer_name": "B", "datetime": "", "total_price": null},
                {"id": 3, "customer_name": "C", "datetime": ""},
                {"id": 4, "customer_name": "D", "datetime": "", "total_price": "49.50"}
            ]"#,
        )
        .unwrap();
        assert_eq!(total_revenue(&orders), 150.0);
    }

    #[test]
    fn recent_orders_are_newest_first_and_capped() {
        let orders = vec![
            order(1, "2024-01-01 09:00:00", 1.0),
            order(2, "2024-03-01 09:00:00", 1.0),
            order(3, "not a date", 1.0),
            order(4, "Wed, 05 Jun 2024 12:00:00 GMT", 1.0),
            order(5, "2024-02-01 09:00:00", 1.0),
            order(6, "2023-12-31 23:59:59", 1.0),
            order(7, "2024-05-01T08:00:00Z", 1.0),
        ];
        let ids: Vec<i64> = recent_orders(&orders, RECENT_ORDERS_LIMIT)
            .iter()
            .map(|o| o.id.value())
            .collect();
        assert_eq!(ids, vec![4, 7, 2, 5, 1]);
    }

    #[test]
    fn top_products_sorted_by_name() {
        let products = vec![
            product(1, "sugar"),
            product(2, "Apple"),
            product(3, "banana"),
        ];
        let names: Vec<String> = top_products(&products, 2)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Apple".to_string(), "banana".to_string()]);
    }

    #[test]
    fn overview_counts_every_collection() {
        let uoms = vec![
            Uom { id: UomId(1), name: "kg".into() },
            Uom { id: UomId(2), name: "piece".into() },
        ];
        let overview = StoreOverview::build(
            &[product(1, "Rice")],
            &[order(1, "2024-01-01", 10.0), order(2, "2024-01-02", 5.0)],
            &uoms,
        );
        assert_eq!(overview.total_products, 1);
        assert_eq!(overview.total_orders, 2);
        assert_eq!(overview.total_uoms, 2);
        assert_eq!(overview.total_revenue, 15.0);
        assert_eq!(overview.recent_orders[0].id, OrderId(2));
    }

    #[test]
    fn empty_collections() {
        let overview = StoreOverview::build(&[], &[], &[]);
        assert_eq!(overview, StoreOverview::default());
    }
}
