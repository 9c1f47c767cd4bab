use super::*;

#[test]
fn usage_endpoint_formats_expected_path() {
    assert_eq!(usage_endpoint("/api/session", "abc123"), "/api/session/abc123/usage");
}

#[test]
fn stop_endpoint_formats_expected_path() {
    assert_eq!(stop_endpoint("/api/session", "abc123"), "/api/session/abc123/stop");
}

#[test]
fn trailing_slash_on_base_is_not_doubled() {
    assert_eq!(usage_endpoint("/api/session/", "s1"), "/api/session/s1/usage");
}

#[test]
fn status_error_prefers_server_error_text() {
    let body = UsageResponse { error: Some("Session not found".to_owned()), ..UsageResponse::default() };
    let err = status_error(404, Some(&body), r#"{"error":"Session not found"}"#);
    assert_eq!(err.to_string(), "server returned 404: Session not found");
}

#[test]
fn status_error_falls_back_to_raw_body() {
    let err = status_error(502, None, "  Bad Gateway\n");
    assert_eq!(err.to_string(), "server returned 502: Bad Gateway");
}

#[test]
fn status_error_reports_empty_body() {
    let err = status_error(500, None, "");
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
    assert_eq!(err.to_string(), "server returned 500: empty response");
}

#[cfg(not(feature = "browser"))]
#[test]
fn calls_are_unavailable_natively() {
    let report = UsageReport { data_used_mb: 1.0 };
    let fut = post_usage("/api/session", "s1", &report);
    let result = block_on_ready(fut);
    assert!(matches!(result, Err(ApiError::Unavailable)));
}

// Minimal executor for futures that complete without awaiting anything.
#[cfg(not(feature = "browser"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
