pub mod aggregate;
pub mod draft;
pub mod submit;

pub use aggregate::{CreateOrderDto, CreateOrderLineDto, Order, OrderId, OrderLine};
pub use draft::{DraftLine, DraftOrder, LineId};
pub use submit::{submit_with, SubmitError, SubmittedOrder};
