use contracts::domain::a002_product::{Product, ProductDto, ProductId};
use contracts::shared::api_error::ApiError;

use crate::shared::api_client;

pub async fn list() -> Result<Vec<Product>, ApiError> {
    api_client::get("/products").await
}

pub async fn get_by_id(id: ProductId) -> Result<Product, ApiError> {
    api_client::get(&format!("/products/{}", id)).await
}

pub async fn create(dto: &ProductDto) -> Result<ProductId, ApiError> {
    api_client::post("/products", dto).await.map(ProductId)
}

pub async fn update(id: ProductId, dto: &ProductDto) -> Result<(), ApiError> {
    api_client::put(&format!("/products/{}", id), dto).await
}

pub async fn delete(id: ProductId) -> Result<(), ApiError> {
    api_client::delete(&format!("/products/{}", id)).await
}
