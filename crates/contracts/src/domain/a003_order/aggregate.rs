use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a002_product::ProductId;
use crate::shared::datetime::parse_datetime;
use crate::shared::decimal::de_decimal;
use crate::shared::search::Searchable;
use crate::shared::text::de_string_or_default;

crate::entity_id!(
    /// Order id
    OrderId
);

/// Order as returned by `GET /orders` and `GET /orders/{id}`.
///
/// The list endpoint omits `order_items`; a missing `total_price` reads as 0
/// and a `null` name or datetime as an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub datetime: String,
    #[serde(default, deserialize_with = "de_decimal")]
    pub total_price: f64,
    #[serde(default)]
    pub order_items: Vec<OrderLine>,
}

impl Order {
    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        parse_datetime(&self.datetime)
    }
}

impl Searchable for Order {
    fn search_text(&self) -> &str {
        &self.customer_name
    }
}

/// Persisted order line, read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub product_name: String,
    #[serde(default, deserialize_with = "de_decimal")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub uom_name: String,
    #[serde(default, deserialize_with = "de_decimal")]
    pub price_per_unit: f64,
    #[serde(default, deserialize_with = "de_decimal")]
    pub total_price: f64,
}

/// Body of `POST /orders`.
///
/// Carries no prices: the server prices the order from its own catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderDto {
    pub customer_name: String,
    pub order_items: Vec<CreateOrderLineDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderLineDto {
    pub product_id: ProductId,
    pub quantity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_row_without_items_or_total() {
        let order: Order = serde_json::from_str(
            r#"{"id": 9, "customer_name": "Asha", "datetime": "2024-10-15 10:30:00"}"#,
        )
        .unwrap();
        assert_eq!(order.total_price, 0.0);
        assert!(order.order_items.is_empty());
        assert!(order.placed_at().is_some());
    }

    #[test]
    fn list_with_null_text_columns_still_decodes() {
        let json = r#"[
            {"id": 1, "customer_name": "Asha", "datetime": null, "total_price": 5},
            {"id": 2, "customer_name": null, "datetime": "2024-10-15 10:30:00", "total_price": "7.50"}
        ]"#;
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].datetime, "");
        assert!(orders[0].placed_at().is_none());
        assert_eq!(orders[0].total_price, 5.0);
        assert_eq!(orders[1].customer_name, "");
        assert_eq!(orders[1].total_price, 7.5);
    }

    #[test]
    fn detail_row_with_items() {
        let json = r#"{
            "id": 9, "customer_name": "Asha",
            "datetime": "Tue, 15 Oct 2024 10:30:00 GMT", "total_price": "150.00",
            "order_items": [{
                "product_name": "Rice", "quantity": "3.00", "uom_name": "kg",
                "price_per_unit": 50, "total_price": 150
            }]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.total_price, 150.0);
        assert_eq!(
            order.order_items,
            vec![OrderLine {
                product_name: "Rice".into(),
                quantity: 3.0,
                uom_name: "kg".into(),
                price_per_unit: 50.0,
                total_price: 150.0,
            }]
        );
    }

    #[test]
    fn create_payload_has_no_price_field() {
        let dto = CreateOrderDto {
            customer_name: "Asha".into(),
            order_items: vec![CreateOrderLineDto {
                product_id: ProductId(1),
                quantity: 3.0,
            }],
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "customer_name": "Asha",
                "order_items": [{"product_id": 1, "quantity": 3.0}]
            })
        );
    }
}
