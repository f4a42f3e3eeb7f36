use contracts::domain::a001_uom::{Uom, UomDto, UomId};
use contracts::shared::api_error::ApiError;

use crate::shared::api_client;

pub async fn list() -> Result<Vec<Uom>, ApiError> {
    api_client::get("/uoms").await
}

pub async fn create(dto: &UomDto) -> Result<UomId, ApiError> {
    api_client::post("/uoms", dto).await.map(UomId)
}

pub async fn delete(id: UomId) -> Result<(), ApiError> {
    api_client::delete(&format!("/uoms/{}", id)).await
}
