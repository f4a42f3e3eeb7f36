use thiserror::Error;

/// Failure of a single API call.
///
/// `Display` yields the message shown to the user: the server-provided
/// `error` text when there is one, otherwise a status-derived fallback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, CORS, offline...).
    #[error("{0}")]
    Network(String),

    /// Non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx status but the envelope carried `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// 2xx status with a body that does not match the expected shape.
    #[error("Invalid server response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn http_fallback(status: u16) -> Self {
        ApiError::Http {
            status,
            message: format!("HTTP error! status: {}", status),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_fallback_message_mentions_status() {
        let err = ApiError::http_fallback(503);
        assert_eq!(err.to_string(), "HTTP error! status: 503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn server_message_is_displayed_verbatim() {
        let err = ApiError::Http {
            status: 500,
            message: "Cannot delete UOM: It is being used by products".into(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot delete UOM: It is being used by products"
        );
        assert_eq!(ApiError::Rejected("nope".into()).status(), None);
    }
}
