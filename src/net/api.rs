//! HTTP calls to the per-session usage endpoints.
//!
//! Browser build: real requests via `gloo-net`.
//! Native build: stubs returning [`ApiError::Unavailable`], so the pure
//! helpers stay testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed [`ApiError`] instead of panics. The usage reporter
//! only logs these; a failed tick never stops the schedule.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{UsageReport, UsageResponse};

/// Failure of a usage endpoint call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside a browser environment.
    #[error("not available outside the browser")]
    Unavailable,
}

fn session_endpoint(base: &str, session_id: &str, action: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/{session_id}/{action}")
}

/// `POST` target for usage reports, e.g. `/api/session/abc123/usage`.
#[must_use]
pub fn usage_endpoint(base: &str, session_id: &str) -> String {
    session_endpoint(base, session_id, "usage")
}

/// `POST` target that ends a sharing session.
#[must_use]
pub fn stop_endpoint(base: &str, session_id: &str) -> String {
    session_endpoint(base, session_id, "stop")
}

/// Build the error for a non-2xx reply, preferring the server's `error` text.
#[must_use]
pub fn status_error(status: u16, body: Option<&UsageResponse>, raw: &str) -> ApiError {
    let message = body
        .and_then(|b| b.error.clone())
        .unwrap_or_else(|| {
            let raw = raw.trim();
            if raw.is_empty() { "empty response".to_owned() } else { raw.to_owned() }
        });
    ApiError::Status { status, message }
}

#[cfg(feature = "browser")]
async fn read_reply(resp: gloo_net::http::Response) -> Result<UsageResponse, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();
        let body = serde_json::from_str::<UsageResponse>(&raw).ok();
        return Err(status_error(status, body.as_ref(), &raw));
    }
    resp.json::<UsageResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send one usage report for `session_id`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails, the server rejects it, or
/// the reply is not JSON.
pub async fn post_usage(base: &str, session_id: &str, report: &UsageReport) -> Result<UsageResponse, ApiError> {
    #[cfg(feature = "browser")]
    {
        let url = usage_endpoint(base, session_id);
        let resp = gloo_net::http::Request::post(&url)
            .json(report)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_reply(resp).await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (base, session_id, report);
        Err(ApiError::Unavailable)
    }
}

/// End the sharing session `session_id` on the server.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the server rejects it.
pub async fn stop_session(base: &str, session_id: &str) -> Result<UsageResponse, ApiError> {
    #[cfg(feature = "browser")]
    {
        let url = stop_endpoint(base, session_id);
        let resp = gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_reply(resp).await
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (base, session_id);
        Err(ApiError::Unavailable)
    }
}
