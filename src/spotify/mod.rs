//! # Spotify Integration Module
//!
//! Thin client layer over the Spotify Web API: one function per outbound
//! call, shaped results, no hidden state. Token lifecycle lives in
//! [`crate::management`]; this layer only consumes credentials.
//!
//! ## Submodules
//!
//! - [`auth`] - authorize URL construction, authorization-code exchange
//!   and refresh-token exchange against the accounts token endpoint
//! - [`top_items`] - the user's most-played artists and tracks
//! - [`user`] - current-user profile lookup
//! - [`playlist`] - playlist creation and track insertion
//!
//! ## Conventions
//!
//! Resource calls authenticate with a Bearer header; token-endpoint calls
//! use HTTP Basic auth built from the client credentials. Each call is a
//! single request/response pass-through with no retry — upstream failures
//! propagate to the request that triggered them. All requests share a
//! fixed outbound timeout.

use std::time::Duration;

use reqwest::Client;

pub mod auth;
pub mod playlist;
pub mod top_items;
pub mod user;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Outbound client with the application-wide timeout applied.
pub(crate) fn http_client() -> Client {
    Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
}
