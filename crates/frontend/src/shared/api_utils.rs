//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the grocery API listens on when no explicit base is configured.
pub const DEFAULT_API_PORT: u16 = 5000;

/// Path prefix every resource lives under.
pub const API_PREFIX: &str = "/api";

/// Get the base URL for API requests
///
/// A base baked in at build time through `GROCERY_API_BASE` wins
/// (e.g. `GROCERY_API_BASE=https://shop.example.com/api trunk build`).
/// Otherwise the base is derived from the current window location,
/// using port 5000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:5000/api"
/// - `"/api"` if window is not available
pub fn api_base() -> String {
    if let Some(configured) = option_env!("GROCERY_API_BASE") {
        return configured.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return API_PREFIX.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!(
        "{}//{}:{}{}",
        protocol, hostname, DEFAULT_API_PORT, API_PREFIX
    )
}

/// Build a full API URL from an endpoint
///
/// # Arguments
/// * `endpoint` - The resource path, e.g. "/products/7"
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/products/7");
/// ```
pub fn api_url(endpoint: &str) -> String {
    join_url(&api_base(), endpoint)
}

fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_exactly_one_slash() {
        assert_eq!(
            join_url("http://127.0.0.1:5000/api", "/uoms"),
            "http://127.0.0.1:5000/api/uoms"
        );
        assert_eq!(join_url("http://h/api/", "orders/3"), "http://h/api/orders/3");
    }
}
