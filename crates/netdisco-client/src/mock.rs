//! Mock NetdiscoClient for unit testing
//!
//! This module provides a mock implementation of NetdiscoClientTrait that can be used
//! in unit tests without requiring a running Netdisco instance.
//!
//! The mock stores canned response bodies per path and records every request
//! so tests can assert on what was sent.

use crate::client::SessionToken;
use crate::config::Credentials;
use crate::error::NetdiscoError;
use crate::netdisco_trait::NetdiscoClientTrait;
use crate::query::SearchQuery;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A request observed by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: &'static str,
    /// Request path relative to the base URL
    pub path: String,
    /// Query parameters as passed by the caller
    pub params: SearchQuery,
}

/// Mock NetdiscoClient for testing
///
/// Logging in issues a fixed `mock-api-key` token; paths without a canned
/// response answer with an empty JSON array.
#[derive(Clone)]
pub struct MockNetdiscoClient {
    base_url: String,
    token: Arc<Mutex<Option<SessionToken>>>,
    responses: Arc<Mutex<HashMap<String, String>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockNetdiscoClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Arc::new(Mutex::new(None)),
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the canned response body for a path (for test setup)
    pub fn set_response(&self, path: impl Into<String>, body: impl Into<String>) {
        self.responses.lock().unwrap().insert(path.into(), body.into());
    }

    /// Requests observed so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, path: &str, params: &SearchQuery) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            params: params.clone(),
        });
    }

    fn canned(&self, path: &str) -> String {
        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| "[]".to_string())
    }
}

#[async_trait::async_trait]
impl NetdiscoClientTrait for MockNetdiscoClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn session_token(&self) -> Option<SessionToken> {
        self.token.lock().unwrap().clone()
    }

    async fn login(&self, _credentials: &Credentials) -> Result<SessionToken, NetdiscoError> {
        let token = SessionToken::from("mock-api-key");
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(token)
    }

    async fn logout(&self) -> bool {
        *self.token.lock().unwrap() = None;
        true
    }

    async fn get(&self, path: &str, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.record("GET", path, params);
        Ok(self.canned(path))
    }

    async fn post(
        &self,
        path: &str,
        _body: &serde_json::Value,
        _extra_headers: &[(&str, &str)],
    ) -> Result<String, NetdiscoError> {
        self.record("POST", path, &SearchQuery::new());
        Ok(self.canned(path))
    }

    async fn search_device(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.get("api/v1/search/device", params).await
    }

    async fn search_node(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.get("api/v1/search/node", params).await
    }

    async fn search_port(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.get("api/v1/search/port", params).await
    }

    async fn search_vlan(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.get("api/v1/search/vlan", params).await
    }
}
