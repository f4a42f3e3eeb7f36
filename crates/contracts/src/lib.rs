//! Shared contracts between the grocery store frontend and its REST backend.
//!
//! Everything in this crate is platform independent: wire DTOs, the response
//! envelope, the error taxonomy and the pure state machines the UI drives.

pub mod dashboards;
pub mod domain;
pub mod shared;
