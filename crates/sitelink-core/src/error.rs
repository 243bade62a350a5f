//! Error types for sitelink.

use thiserror::Error;

use crate::models::StoreFailure;

/// Result type alias using sitelink's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for sitelink operations.
///
/// The import routine absorbs exactly two variants internally: `NotFound`
/// (a parent call document missing remotely) and a `Store` failure whose
/// first sub-error is a duplicate-value rejection. Everything else is fatal
/// to the run and surfaces to the caller with the reason text preserved.
#[derive(Error, Debug)]
pub enum Error {
    /// A referenced remote document does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The record store rejected a request with a structured failure.
    #[error("Record store error: {0}")]
    Store(StoreFailure),

    /// HTTP/network request failed.
    #[error("Request error: {0}")]
    Request(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoreSubError;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("workspace document D1".to_string());
        assert_eq!(err.to_string(), "Not found: workspace document D1");
    }

    #[test]
    fn test_error_display_request() {
        let err = Error::Request("connection refused".to_string());
        assert_eq!(err.to_string(), "Request error: connection refused");
    }

    #[test]
    fn test_error_display_store_uses_first_sub_error() {
        let err = Error::Store(StoreFailure {
            message: "record API returned 400".to_string(),
            errors: vec![StoreSubError {
                error_code: "REQUIRED_FIELD_MISSING".to_string(),
                message: "name is required".to_string(),
            }],
        });
        assert_eq!(err.to_string(), "Record store error: name is required");
    }

    #[test]
    fn test_error_display_store_without_sub_errors() {
        let err = Error::Store(StoreFailure {
            message: "record API returned 503".to_string(),
            errors: vec![],
        });
        assert_eq!(err.to_string(), "Record store error: record API returned 503");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
