pub mod api_error;
pub mod api_response;
pub mod datetime;
pub mod decimal;
pub mod generation;
pub mod search;
pub mod text;
pub mod validation;
