pub mod aggregate;

pub use aggregate::{Uom, UomDto, UomId};
