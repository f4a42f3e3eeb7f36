use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::api_error::ApiError;

/// Envelope every resource endpoint answers with.
///
/// ```json
/// { "success": true, "data": [...] }
/// { "success": false, "error": "Product not found" }
/// { "success": true, "message": "Product deleted" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Payload of a successful response; a missing `data` is a decode error.
    pub fn require_data(self) -> Result<T, ApiError> {
        self.data
            .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
    }
}

/// `data` of a create call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: i64,
}

/// Body of `GET /health`, which is not wrapped in the envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success_status(status) {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());
    Err(match message {
        Some(message) => ApiError::Http { status, message },
        None => ApiError::http_fallback(status),
    })
}

/// Turn a raw HTTP status and body into an envelope.
///
/// Non-2xx → `ApiError::Http` (server `error` text when present),
/// `success: false` → `ApiError::Rejected`, unparseable 2xx → `ApiError::Decode`.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiResponse<T>, ApiError> {
    check_status(status, body)?;

    let response: ApiResponse<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.success {
        let message = response
            .error
            .clone()
            .unwrap_or_else(|| "Request was not successful".to_string());
        return Err(ApiError::Rejected(message));
    }

    Ok(response)
}

/// Decode a body that is not wrapped in the envelope (only `/health` today).
pub fn decode_plain<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_successful_list() {
        let body = r#"{"success": true, "data": [1, 2, 3]}"#;
        let resp: ApiResponse<Vec<i32>> = decode_envelope(200, body).unwrap();
        assert_eq!(resp.require_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn message_only_response_has_no_data() {
        let body = r#"{"success": true, "message": "Product deleted"}"#;
        let resp: ApiResponse<serde_json::Value> = decode_envelope(200, body).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Product deleted"));
        assert!(matches!(resp.require_data(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn non_2xx_uses_server_error_text() {
        let body = r#"{"success": false, "error": "Missing required fields"}"#;
        let err = decode_envelope::<CreatedId>(400, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 400,
                message: "Missing required fields".to_string()
            }
        );
    }

    #[test]
    fn non_2xx_without_json_falls_back_to_status() {
        let err = decode_envelope::<CreatedId>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 502");
    }

    #[test]
    fn success_false_on_2xx_is_rejected() {
        let body = r#"{"success": false, "error": "Order must have at least one item"}"#;
        let err = decode_envelope::<CreatedId>(200, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected("Order must have at least one item".to_string())
        );
    }

    #[test]
    fn malformed_2xx_body_is_a_decode_error() {
        let err = decode_envelope::<Vec<i32>>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn created_id_round_trips_from_server_shape() {
        let body = r#"{"success": true, "data": {"id": 42}}"#;
        let id = decode_envelope::<CreatedId>(201, body)
            .and_then(ApiResponse::require_data)
            .unwrap();
        assert_eq!(id, CreatedId { id: 42 });
    }

    #[test]
    fn health_is_decoded_without_envelope() {
        let body = r#"{"status": "healthy", "message": "Grocery Management API is running"}"#;
        let health: HealthStatus = decode_plain(200, body).unwrap();
        assert!(health.is_healthy());
    }
}
