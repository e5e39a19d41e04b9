//! Netdisco REST API Client
//!
//! A Rust client library for interacting with the Netdisco REST API.
//! Handles session login, token management, and the search endpoints for
//! devices, nodes, ports and VLANs.
//!
//! # Example
//!
//! ```no_run
//! use netdisco_client::{ClientConfig, Credentials, NetdiscoClient, SearchQuery};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client and log in
//! let config = ClientConfig::new("https://netdisco.example.com:443");
//! let credentials = Credentials::new("admin", "secret");
//! let client = NetdiscoClient::connect(config, &credentials).await?;
//!
//! // Search for a VLAN by number
//! let query = SearchQuery::new().param("q", "64");
//! let vlans = client.search_vlan(&query).await?;
//! println!("{}", vlans);
//!
//! // Ports can be searched by name fragment
//! let query = SearchQuery::new()
//!     .param("q", "(Slot: 4 Port: 48)")
//!     .param("partial", true);
//! let ports = client.search_port(&query).await?;
//! println!("{}", ports);
//!
//! // Drop the session
//! client.logout().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Session Handling**: Login with HTTP Basic credentials, token reuse, logout
//! - **Search Operations**: Devices, nodes, ports and VLANs
//! - **Raw Dispatch**: GET/POST pass-through for report endpoints
//! - **Mocking**: `NetdiscoClientTrait` plus an in-memory mock for unit tests

pub mod client;
pub mod config;
#[cfg(test)]
mod config_test;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;
#[cfg(test)]
mod mock_test;
#[path = "trait.rs"]
pub mod netdisco_trait;
pub mod query;

pub use client::{NetdiscoClient, SessionToken};
pub use config::{ClientConfig, Credentials};
pub use error::NetdiscoError;
#[cfg(any(test, feature = "test-util"))]
pub use mock::{MockNetdiscoClient, RecordedRequest};
pub use netdisco_trait::NetdiscoClientTrait;
pub use query::{ParamValue, SearchQuery};
