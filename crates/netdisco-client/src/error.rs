//! Netdisco client errors

use thiserror::Error;

/// Errors that can occur when interacting with the Netdisco API
#[derive(Debug, Error)]
pub enum NetdiscoError {
    /// Client configuration rejected before any request was sent
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Login failed or the login response could not be understood
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// HTTP request/response error
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Netdisco answered a POST with a non-200 status
    #[error("Netdisco returned {status}: {body}")]
    Service {
        /// HTTP status of the failed response
        status: reqwest::StatusCode,
        /// Verbatim response body
        body: String,
    },
}
