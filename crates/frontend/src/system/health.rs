//! Backend connectivity check (`GET /health`).

use contracts::shared::api_error::ApiError;
use contracts::shared::api_response::HealthStatus;

use crate::shared::api_client;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online,
    /// Reachable but reporting something other than `healthy`.
    Degraded,
    Offline,
}

impl BackendStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "Checking API...",
            BackendStatus::Online => "API online",
            BackendStatus::Degraded => "API degraded",
            BackendStatus::Offline => "API offline",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "checking",
            BackendStatus::Online => "online",
            BackendStatus::Degraded => "degraded",
            BackendStatus::Offline => "offline",
        }
    }

    fn from_result(result: &Result<HealthStatus, ApiError>) -> Self {
        match result {
            Ok(h) if h.is_healthy() => BackendStatus::Online,
            Ok(_) => BackendStatus::Degraded,
            Err(_) => BackendStatus::Offline,
        }
    }
}

pub async fn fetch_health() -> Result<HealthStatus, ApiError> {
    api_client::get_plain::<HealthStatus>("/health").await
}

pub async fn check() -> BackendStatus {
    let result = fetch_health().await;
    match &result {
        Ok(h) => log::debug!("health: {} {}", h.status, h.message),
        Err(e) => log::warn!("health check failed: {}", e),
    }
    BackendStatus::from_result(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_health_payload() {
        let ok = Ok(HealthStatus {
            status: "healthy".into(),
            message: "Grocery Management API is running".into(),
        });
        assert_eq!(BackendStatus::from_result(&ok), BackendStatus::Online);

        let degraded = Ok(HealthStatus {
            status: "starting".into(),
            message: String::new(),
        });
        assert_eq!(BackendStatus::from_result(&degraded), BackendStatus::Degraded);

        let down: Result<HealthStatus, ApiError> = Err(ApiError::Network("refused".into()));
        assert_eq!(BackendStatus::from_result(&down), BackendStatus::Offline);
    }
}
