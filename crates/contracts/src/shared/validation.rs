use thiserror::Error;

/// Client-side validation failures. Raised before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter customer name")]
    MissingCustomer,

    #[error("Please add at least one valid item to the order")]
    NoValidItems,

    #[error("Please fill in all required fields")]
    MissingProductFields,

    #[error("Please enter UOM name")]
    MissingUomName,
}
