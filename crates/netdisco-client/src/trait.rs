//! NetdiscoClient trait for mocking
//!
//! This trait abstracts the NetdiscoClient to enable mocking in unit tests.
//! The concrete NetdiscoClient implements this trait, and tests can use mock implementations.

use crate::client::SessionToken;
use crate::config::Credentials;
use crate::error::NetdiscoError;
use crate::query::SearchQuery;

/// Trait for Netdisco API client operations
///
/// This trait enables mocking of Netdisco API calls for unit testing.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetdiscoClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Get the current session token, if logged in
    fn session_token(&self) -> Option<SessionToken>;

    /// Log in and store the session token
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, NetdiscoError>;

    /// Log out and clear the session token
    async fn logout(&self) -> bool;

    /// Send a GET request and return the raw response body
    async fn get(&self, path: &str, params: &SearchQuery) -> Result<String, NetdiscoError>;

    /// Send a POST request and return the raw response body
    async fn post(&self, path: &str, body: &serde_json::Value, extra_headers: &[(&str, &str)]) -> Result<String, NetdiscoError>;

    // Search Operations
    async fn search_device(&self, params: &SearchQuery) -> Result<String, NetdiscoError>;
    async fn search_node(&self, params: &SearchQuery) -> Result<String, NetdiscoError>;
    async fn search_port(&self, params: &SearchQuery) -> Result<String, NetdiscoError>;
    async fn search_vlan(&self, params: &SearchQuery) -> Result<String, NetdiscoError>;
}
