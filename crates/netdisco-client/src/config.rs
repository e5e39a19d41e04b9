//! Client configuration and credentials

use crate::error::NetdiscoError;
use base64::{Engine as _, engine::general_purpose};
use std::fmt;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a Netdisco instance
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Netdisco instance (e.g., "https://netdisco.example.com:443")
    pub base_url: String,
    /// Verify the server TLS certificate
    pub verify_certificate: bool,
    /// Refuse to talk to the server over plain HTTP
    pub enforce_encryption: bool,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with secure defaults
    ///
    /// Certificate verification and encryption enforcement are on; both can
    /// be switched off for lab instances that only speak plain HTTP.
    ///
    /// # Arguments
    /// * `base_url` - Netdisco base URL, with scheme and optional port
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            verify_certificate: true,
            enforce_encryption: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set certificate verification (builder style)
    pub fn with_verify_certificate(mut self, verify: bool) -> Self {
        self.verify_certificate = verify;
        self
    }

    /// Set encryption enforcement (builder style)
    pub fn with_enforce_encryption(mut self, enforce: bool) -> Self {
        self.enforce_encryption = enforce;
        self
    }

    /// Set the per-request timeout (builder style)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the configuration before any request is made
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is usable
    /// * `Err(NetdiscoError::Configuration)` - Base URL is empty, or
    ///   encryption is enforced and the URL scheme is not https
    pub fn validate(&self) -> Result<(), NetdiscoError> {
        if self.base_url.is_empty() {
            return Err(NetdiscoError::Configuration(
                "Base URL must not be empty".to_string(),
            ));
        }

        if self.enforce_encryption && !self.base_url.starts_with("https://") {
            return Err(NetdiscoError::Configuration(format!(
                "Encryption is enforced but base URL is not https: {}",
                self.base_url
            )));
        }

        Ok(())
    }
}

/// Username/password pair for Netdisco login
///
/// The `Debug` implementation redacts the password so a configuration can
/// be logged without leaking secrets.
#[derive(Clone)]
pub struct Credentials {
    /// Account name
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Base64 encoding of `username:password` for HTTP Basic authentication
    pub fn basic_blob(&self) -> String {
        general_purpose::STANDARD.encode(format!("{}:{}", self.username, self.password))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
