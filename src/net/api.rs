//! HTTP helpers for the forum's JSON endpoints.
//!
//! Browser builds make real calls via `gloo-net`; host builds get stubs
//! returning [`ApiError::Unavailable`] so callers compile and the pure
//! layers stay testable without a DOM.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into [`ApiError`]. Callers decide how
//! loud to be: voting surfaces errors to the user, share retrieval only
//! logs them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

/// Failure of a single request. The UI treats every variant the same
/// way; the split exists so diagnostics name what actually broke.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside a browser")]
    Unavailable,
}

/// `POST` to `path` with an empty JSON-typed body and decode the JSON
/// response.
///
/// # Errors
///
/// Returns [`ApiError`] when the request cannot be sent, the server
/// responds non-2xx, or the body fails to decode.
pub async fn post_empty_json<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::post(path)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `GET` `path` and decode the JSON response.
///
/// # Errors
///
/// Same taxonomy as [`post_empty_json`].
pub async fn get_json<T>(path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}
