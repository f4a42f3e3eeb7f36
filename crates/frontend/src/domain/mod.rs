pub mod a001_uom;
pub mod a002_product;
pub mod a003_order;
