use crate::base::preferror::PrefError;
use std::io::{Error, ErrorKind};

#[test]
fn test_io_error_retryable() {
    let err = PrefError::from(Error::new(ErrorKind::PermissionDenied, "denied"));
    assert!(err.is_retryable());
}

#[test]
fn test_json_error_not_retryable() {
    let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
    let err = PrefError::from(json_err);
    assert!(!err.is_retryable());
}

#[test]
fn test_error_display_includes_cause() {
    let err = PrefError::from(Error::new(ErrorKind::NotFound, "no such file"));
    let msg = err.to_string();
    assert!(msg.contains("cookie jar I/O failed"));
    assert!(msg.contains("no such file"));
}
