use contracts::dashboards::d400_store_overview::StoreOverview;
use contracts::shared::api_error::ApiError;

use crate::domain::{a001_uom, a002_product, a003_order};

/// Fetch products, orders and UOMs concurrently and summarize them.
///
/// The first failure wins; nothing is shown from a partial load.
pub async fn load_overview() -> Result<StoreOverview, ApiError> {
    let (products, orders, uoms) = futures::join!(
        a002_product::api::list(),
        a003_order::api::list(),
        a001_uom::api::list(),
    );
    Ok(StoreOverview::build(&products?, &orders?, &uoms?))
}
