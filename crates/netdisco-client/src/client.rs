//! Netdisco API client
//!
//! Implements the Netdisco REST API session flow: login against /login,
//! token-authenticated requests, and the search endpoints under
//! /api/v1/search/.

use crate::config::{ClientConfig, Credentials};
use crate::error::NetdiscoError;
use crate::netdisco_trait::NetdiscoClientTrait;
use crate::query::SearchQuery;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, warn};

/// Versioned API root for search and report endpoints
const API_ROOT: &str = "api/v1";

/// Opaque session token issued by Netdisco at login
///
/// Sent verbatim in the `Authorization` header of authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Token value as sent on the wire
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        SessionToken(value)
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        SessionToken(value.to_string())
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a successful login response
#[derive(Debug, Deserialize)]
struct LoginResponse {
    api_key: String,
}

/// Netdisco API client
///
/// Holds the HTTP client and the session token for the lifetime of the
/// session. All methods take `&self`; the token cell is guarded so login
/// and logout can race concurrent searches without tearing.
pub struct NetdiscoClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<SessionToken>>,
}

impl NetdiscoClient {
    /// Create a new Netdisco client without logging in
    ///
    /// The configuration is validated before the HTTP client is built, so
    /// an insecure or empty base URL fails here rather than at the first
    /// request.
    ///
    /// # Arguments
    /// * `config` - Connection settings for the Netdisco instance
    pub fn new(config: ClientConfig) -> Result<Self, NetdiscoError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_certificate)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
        })
    }

    /// Create a client and log in immediately
    ///
    /// A login failure propagates, so a successfully constructed client is
    /// always holding a session token.
    ///
    /// # Arguments
    /// * `config` - Connection settings for the Netdisco instance
    /// * `credentials` - Account to log in as
    pub async fn connect(
        config: ClientConfig,
        credentials: &Credentials,
    ) -> Result<Self, NetdiscoError> {
        let client = Self::new(config)?;
        client.login(credentials).await?;
        Ok(client)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the current session token, if logged in
    pub fn session_token(&self) -> Option<SessionToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the stored session token
    fn set_token(&self, token: Option<SessionToken>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Join an endpoint path onto the base URL
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Log in and store the session token
    ///
    /// Sends the Base64 `username:password` blob in the JSON body of a POST
    /// to `/login` and extracts the `api_key` from the response. The token
    /// is stored on the client and also returned to the caller.
    ///
    /// # Returns
    /// * `Ok(SessionToken)` - Login succeeded
    /// * `Err(NetdiscoError::Service)` - Netdisco rejected the login
    /// * `Err(NetdiscoError::Authentication)` - The login response was not
    ///   valid JSON or carried no `api_key`
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken, NetdiscoError> {
        let payload = serde_json::json!({
            "authorization": format!("Basic {}", credentials.basic_blob()),
        });

        debug!("Logging in to {} as {}", self.base_url, credentials.username);

        let body = self.post("login", &payload, &[]).await?;

        let response: LoginResponse = serde_json::from_str(&body).map_err(|e| {
            NetdiscoError::Authentication(format!("Unexpected login response: {}", e))
        })?;

        let token = SessionToken::from(response.api_key);
        self.set_token(Some(token.clone()));
        Ok(token)
    }

    /// Log out and clear the session token
    ///
    /// The request outcome is ignored: whether the server confirms the
    /// logout, rejects it, or is unreachable, the local token is dropped
    /// and the session is over from the client's point of view.
    pub async fn logout(&self) -> bool {
        debug!("Logging out from {}", self.base_url);

        if let Err(e) = self.get("logout", &SearchQuery::new()).await {
            warn!("Logout request failed: {}", e);
        }

        self.set_token(None);
        true
    }

    /// Send a GET request and return the raw response body
    ///
    /// The session token, when present, rides in the `Authorization`
    /// header. The response body is returned verbatim regardless of the
    /// HTTP status; interpreting it is the caller's business.
    ///
    /// # Arguments
    /// * `path` - Endpoint path relative to the base URL
    /// * `params` - Query parameters, forwarded in order
    pub async fn get(&self, path: &str, params: &SearchQuery) -> Result<String, NetdiscoError> {
        let url = self.endpoint_url(path);
        debug!("GET {}", url);

        let mut request = self.client.get(&url).header("Accept", "application/json");

        if !params.is_empty() {
            request = request.query(&params.as_pairs());
        }

        if let Some(token) = self.session_token() {
            request = request.header("Authorization", token.as_str());
        }

        let response = request.send().await?;
        let body = response.text().await?;
        Ok(body)
    }

    /// Send a POST request and return the raw response body
    ///
    /// `extra_headers` are merged over the default `Accept` header, so a
    /// caller-supplied `Accept` wins. A 200 response yields the body
    /// verbatim; any other status is logged and surfaced as
    /// `NetdiscoError::Service` with the status and body attached.
    ///
    /// # Arguments
    /// * `path` - Endpoint path relative to the base URL
    /// * `body` - JSON request body
    /// * `extra_headers` - Additional headers for this request
    pub async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
        extra_headers: &[(&str, &str)],
    ) -> Result<String, NetdiscoError> {
        let url = self.endpoint_url(path);
        debug!("POST {}", url);

        let mut request = self.client.post(&url).json(body);

        let accept_overridden = extra_headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("accept"));
        if !accept_overridden {
            request = request.header("Accept", "application/json");
        }

        for &(name, value) in extra_headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::OK {
            Ok(text)
        } else {
            warn!("POST {} returned {}: {}", url, status, text);
            Err(NetdiscoError::Service { status, body: text })
        }
    }

    /// Search for devices
    ///
    /// # Arguments
    /// * `params` - Query parameters such as `q` (name, IP or description
    ///   fragment) and `matchall`; forwarded verbatim
    ///
    /// # Returns
    /// * `Ok(String)` - Raw JSON response body
    /// * `Err(NetdiscoError)` - If the request fails
    pub async fn search_device(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.get(&format!("{}/search/device", API_ROOT), params).await
    }

    /// Search for nodes (end stations) by MAC, IP or hostname
    ///
    /// # Arguments
    /// * `params` - Query parameters such as `q`, `partial` and
    ///   `deviceports`; forwarded verbatim
    pub async fn search_node(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.get(&format!("{}/search/node", API_ROOT), params).await
    }

    /// Search for device ports
    ///
    /// # Arguments
    /// * `params` - Query parameters such as `q` (port name, VLAN or MAC
    ///   address) and `partial`; forwarded verbatim
    pub async fn search_port(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.get(&format!("{}/search/port", API_ROOT), params).await
    }

    /// Search for VLANs by number or name
    ///
    /// # Arguments
    /// * `params` - Query parameters such as `q`; forwarded verbatim
    pub async fn search_vlan(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.get(&format!("{}/search/vlan", API_ROOT), params).await
    }
}

// Implement NetdiscoClientTrait for NetdiscoClient
// This delegates all trait methods to the existing implementations
#[async_trait::async_trait]
impl NetdiscoClientTrait for NetdiscoClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    fn session_token(&self) -> Option<SessionToken> {
        self.session_token()
    }

    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, NetdiscoError> {
        self.login(credentials).await
    }

    async fn logout(&self) -> bool {
        self.logout().await
    }

    async fn get(&self, path: &str, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.get(path, params).await
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
        extra_headers: &[(&str, &str)],
    ) -> Result<String, NetdiscoError> {
        self.post(path, body, extra_headers).await
    }

    async fn search_device(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.search_device(params).await
    }

    async fn search_node(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.search_node(params).await
    }

    async fn search_port(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.search_port(params).await
    }

    async fn search_vlan(&self, params: &SearchQuery) -> Result<String, NetdiscoError> {
        self.search_vlan(params).await
    }
}
