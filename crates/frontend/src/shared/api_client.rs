//! Thin JSON client for the grocery REST API.
//!
//! Every call goes through [`execute`], which sends the request, decodes the
//! `{success, data, error}` envelope and logs any failure before handing it
//! back. Resource modules (`domain::*::api`) only pick method, path and body.

use contracts::shared::api_error::ApiError;
use contracts::shared::api_response::{decode_envelope, decode_plain, ApiResponse, CreatedId};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;

fn with_json_headers(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
}

fn log_failure(endpoint: &str, err: ApiError) -> ApiError {
    match err.status() {
        Some(status) => log::error!("API request failed: {} [HTTP {}] -> {}", endpoint, status, err),
        None => log::error!("API request failed: {} -> {:?}", endpoint, err),
    }
    err
}

fn network(endpoint: &str, what: &str, e: gloo_net::Error) -> ApiError {
    log_failure(endpoint, ApiError::Network(format!("{}: {}", what, e)))
}

async fn fetch_text(
    endpoint: &str,
    request: Result<Request, gloo_net::Error>,
) -> Result<(u16, String), ApiError> {
    let request = request.map_err(|e| network(endpoint, "Failed to build request", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| network(endpoint, "Failed to send request", e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| network(endpoint, "Failed to read response", e))?;

    Ok((status, body))
}

async fn execute<T: DeserializeOwned>(
    endpoint: &str,
    request: Result<Request, gloo_net::Error>,
) -> Result<ApiResponse<T>, ApiError> {
    let (status, body) = fetch_text(endpoint, request).await?;
    decode_envelope::<T>(status, &body).map_err(|e| log_failure(endpoint, e))
}

/// `GET endpoint` → `data`
pub async fn get<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let request = with_json_headers(Request::get(&api_url(endpoint))).build();
    execute::<T>(endpoint, request)
        .await?
        .require_data()
        .map_err(|e| log_failure(endpoint, e))
}

/// `GET endpoint` for bodies that are not wrapped in the envelope.
pub async fn get_plain<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let request = with_json_headers(Request::get(&api_url(endpoint))).build();
    let (status, body) = fetch_text(endpoint, request).await?;
    decode_plain::<T>(status, &body).map_err(|e| log_failure(endpoint, e))
}

/// `POST endpoint` with a JSON body → id of the created record
pub async fn post<B: Serialize>(endpoint: &str, body: &B) -> Result<i64, ApiError> {
    let request = with_json_headers(Request::post(&api_url(endpoint))).json(body);
    let created: CreatedId = execute::<CreatedId>(endpoint, request)
        .await?
        .require_data()
        .map_err(|e| log_failure(endpoint, e))?;
    Ok(created.id)
}

/// `PUT endpoint` with a JSON body
pub async fn put<B: Serialize>(endpoint: &str, body: &B) -> Result<(), ApiError> {
    let request = with_json_headers(Request::put(&api_url(endpoint))).json(body);
    execute::<serde::de::IgnoredAny>(endpoint, request).await?;
    Ok(())
}

/// `DELETE endpoint`
pub async fn delete(endpoint: &str) -> Result<(), ApiError> {
    let request = with_json_headers(Request::delete(&api_url(endpoint))).build();
    execute::<serde::de::IgnoredAny>(endpoint, request).await?;
    Ok(())
}
