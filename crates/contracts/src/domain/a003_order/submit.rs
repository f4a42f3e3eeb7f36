//! Submitting a draft order.
//!
//! The transport is passed in, so the same flow runs against the real API
//! in the browser and against a stub in tests.

use std::future::Future;

use thiserror::Error;

use super::aggregate::{CreateOrderDto, OrderId};
use super::draft::DraftOrder;
use crate::shared::api_error::ApiError;
use crate::shared::validation::ValidationError;

/// Why a submit did not create an order. `Display` is the banner text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Rejected locally; no request was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Failed to create order: {0}")]
    Failed(ApiError),
}

/// Created order id and the number of lines that were sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedOrder {
    pub id: OrderId,
    pub items: usize,
}

/// Validate `draft` and hand the payload to `create`.
///
/// The draft is only read: whatever `create` returns, the caller still holds
/// the exact draft the user was editing.
pub async fn submit_with<C, F>(draft: &DraftOrder, create: C) -> Result<SubmittedOrder, SubmitError>
where
    C: FnOnce(CreateOrderDto) -> F,
    F: Future<Output = Result<OrderId, ApiError>>,
{
    let payload = draft.build_payload()?;
    let items = payload.order_items.len();
    let id = create(payload).await.map_err(SubmitError::Failed)?;
    Ok(SubmittedOrder { id, items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_uom::UomId;
    use crate::domain::a002_product::{Product, ProductId};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn rice() -> Product {
        Product {
            id: ProductId(1),
            name: "Rice".into(),
            price_per_unit: 50.0,
            uom_id: UomId(1),
            uom_name: "kg".into(),
        }
    }

    fn filled_draft() -> DraftOrder {
        let mut draft = DraftOrder::with_blank_line();
        draft.customer_name = "Asha".into();
        let id = draft.lines()[0].id;
        draft.set_product(id, Some(&rice()));
        draft.set_quantity(id, "3");
        draft
    }

    #[test]
    fn server_rejection_keeps_draft_and_reports_message() {
        let draft = filled_draft();
        let snapshot = draft.clone();

        let result = block_on(submit_with(&draft, |_| async {
            Err(ApiError::Http {
                status: 400,
                message: "Order must have at least one item".into(),
            })
        }));

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to create order: Order must have at least one item"
        );
        assert_eq!(draft, snapshot);
        assert_eq!(draft.customer_name, "Asha");
        assert_eq!(draft.total(), 150.0);
    }

    #[test]
    fn invalid_draft_never_reaches_transport() {
        let called = Cell::new(false);
        let mut draft = filled_draft();
        draft.customer_name = "   ".into();

        let result = block_on(submit_with(&draft, |_| {
            called.set(true);
            async { Ok(OrderId(1)) }
        }));

        assert_eq!(
            result,
            Err(SubmitError::Invalid(ValidationError::MissingCustomer))
        );
        assert_eq!(result.unwrap_err().to_string(), "Please enter customer name");
        assert!(!called.get());
    }

    #[test]
    fn success_sends_priceless_payload_and_returns_id() {
        let draft = filled_draft();
        let sent = Cell::new(None);

        let result = block_on(submit_with(&draft, |payload| {
            sent.set(Some(payload));
            async { Ok(OrderId(42)) }
        }));

        assert_eq!(result, Ok(SubmittedOrder { id: OrderId(42), items: 1 }));
        let payload = sent.take().unwrap();
        assert_eq!(payload.customer_name, "Asha");
        assert_eq!(payload.order_items[0].product_id, ProductId(1));
        assert_eq!(payload.order_items[0].quantity, 3.0);
    }
}
