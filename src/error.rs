//! Error types for spacectl
//!
//! Internal helpers return `Result<T, Error>` with Error defined here.
//! The public operations in [`crate::api`] flatten these into degraded
//! return values at their boundary (see module docs there).

use thiserror::Error;

/// The main error type for spacectl
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Token is required to {action} a space")]
    MissingToken { action: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing-token error for a mutating action
    pub fn missing_token(action: impl Into<String>) -> Self {
        Self::MissingToken {
            action: action.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// True when the error carries an HTTP status code from the remote API
    pub fn is_http_status(&self) -> bool {
        matches!(self, Error::HttpStatus { .. })
    }
}

/// Result type alias for spacectl
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_token("restart");
        assert_eq!(err.to_string(), "Token is required to restart a space");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_is_http_status() {
        assert!(Error::http_status(404, "").is_http_status());
        assert!(!Error::config("test").is_http_status());
        assert!(!Error::Other("boom".to_string()).is_http_status());
    }
}
