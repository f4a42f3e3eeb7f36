//! "Create Order" modal
//!
//! - view_model.rs: the draft order and the submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CreateOrderModal;
pub use view_model::CreateOrderViewModel;
