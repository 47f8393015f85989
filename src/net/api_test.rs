use super::*;

// =============================================================
// ApiError display
// =============================================================

#[test]
fn network_error_names_the_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn status_error_carries_the_code() {
    let err = ApiError::Status(503);
    assert_eq!(err.to_string(), "server returned status 503");
}

#[test]
fn decode_error_names_the_cause() {
    let err = ApiError::Decode("expected value at line 1".to_owned());
    assert_eq!(
        err.to_string(),
        "malformed response: expected value at line 1"
    );
}

#[test]
fn unavailable_mentions_the_browser() {
    assert_eq!(
        ApiError::Unavailable.to_string(),
        "not available outside a browser"
    );
}
