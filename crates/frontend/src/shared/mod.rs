pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_utils;
pub mod load_guard;
pub mod modal_frame;
pub mod notify;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
