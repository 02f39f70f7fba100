//! Error types for reel.

use thiserror::Error;

/// Result type alias using reel's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for reel operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store fault not originating from the database driver
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("movie abc".to_string());
        assert_eq!(err.to_string(), "Not found: movie abc");
    }

    #[test]
    fn test_error_display_store() {
        let err = Error::Store("connection refused".to_string());
        assert_eq!(err.to_string(), "Store error: connection refused");
    }

    #[test]
    fn test_error_display_database() {
        let err = Error::Database(sqlx::Error::PoolClosed);
        assert!(err.to_string().starts_with("Database error:"));
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
