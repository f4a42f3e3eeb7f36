use contracts::domain::a003_order::{CreateOrderDto, Order, OrderId};
use contracts::shared::api_error::ApiError;

use crate::shared::api_client;

pub async fn list() -> Result<Vec<Order>, ApiError> {
    api_client::get("/orders").await
}

/// Order with its persisted line items.
pub async fn get_by_id(id: OrderId) -> Result<Order, ApiError> {
    api_client::get(&format!("/orders/{}", id)).await
}

pub async fn create(dto: &CreateOrderDto) -> Result<OrderId, ApiError> {
    api_client::post("/orders", dto).await.map(OrderId)
}

pub async fn delete(id: OrderId) -> Result<(), ApiError> {
    api_client::delete(&format!("/orders/{}", id)).await
}
