//! Uniform outbound request execution against the configured backend origin.
//!
//! Every endpoint function resolves to `Ok` or an [`ApiError`]; once a
//! request is issued there is no timeout, retry, or cancellation.

use crate::config::api_url;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure taxonomy for backend calls.
///
/// All three classes collapse to one transient notification at the view
/// layer; nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response; carries the numeric status code.
    #[error("HTTP {0}")]
    Status(u16),
    /// Transport failure; the underlying message verbatim.
    #[error("{0}")]
    Network(String),
    /// The body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

/// GET a JSON payload from `path` (relative to the configured origin).
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST to `path` with an empty body; the response body is not consumed.
pub async fn post_trigger(path: &str) -> Result<(), ApiError> {
    let response = Request::post(&api_url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

/// POST a multipart form to `path`.
///
/// No content-type header is set: the transport must supply its own
/// multipart boundary.
pub async fn post_form(path: &str, form: web_sys::FormData) -> Result<(), ApiError> {
    let request = Request::post(&api_url(path))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_code() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP 500");
        assert_eq!(ApiError::Status(404).to_string(), "HTTP 404");
    }

    #[test]
    fn test_network_error_is_verbatim() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }
}
