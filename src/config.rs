//! Configuration management for the Topspot web application.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! server bind address, and the fixed OAuth parameters.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::env;

/// Spotify OAuth authorization endpoint.
pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";

/// Spotify OAuth token endpoint, used for both the authorization-code
/// exchange and the refresh-token exchange.
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Spotify Web API base URL.
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Permission scopes requested during authorization: read top items,
/// modify playlists, read the user profile.
pub const SPOTIFY_SCOPE: &str =
    "user-top-read playlist-modify-public playlist-modify-private user-read-private";

/// How many top artists/tracks a single view requests.
pub const TOP_ITEMS_LIMIT: u8 = 10;

/// Loads environment variables from a `.env` file in the working directory.
///
/// The file is optional; variables already present in the process
/// environment always take precedence. Call once at startup, before any
/// configuration value is read.
///
/// # Example
///
/// ```
/// use topspot::config;
///
/// config::load_env();
/// ```
pub fn load_env() {
    let _ = dotenv::dotenv();
}

/// Validates at startup that the Spotify client credentials are present.
///
/// Returns an error naming the missing variable so the caller can refuse to
/// start instead of failing on the first login request.
pub fn require_credentials() -> Result<(), String> {
    for var in ["CLIENT_ID", "CLIENT_SECRET"] {
        if env::var(var).map(|v| v.is_empty()).unwrap_or(true) {
            return Err(format!("{} must be set", var));
        }
    }
    Ok(())
}

/// Returns the server bind address, e.g. `127.0.0.1:5000`.
///
/// Retrieves the `SERVER_ADDRESS` environment variable, falling back to
/// `127.0.0.1:5000` (the address the default redirect URI points at).
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:5000".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `CLIENT_ID` environment variable which contains the client
/// ID obtained when registering the application with Spotify's developer
/// platform.
///
/// # Panics
///
/// Panics if the `CLIENT_ID` environment variable is not set. Startup calls
/// [`require_credentials`] so this is not reachable from a request handler
/// in a correctly started process.
pub fn client_id() -> String {
    env::var("CLIENT_ID").expect("CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `CLIENT_SECRET` environment variable. The secret is only
/// ever sent to the token endpoint inside the HTTP Basic header; it must
/// never appear in logs or rendered pages.
///
/// # Panics
///
/// Panics if the `CLIENT_SECRET` environment variable is not set. Startup
/// calls [`require_credentials`] so this is not reachable from a request
/// handler in a correctly started process.
pub fn client_secret() -> String {
    env::var("CLIENT_SECRET").expect("CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI registered with Spotify.
///
/// Retrieves the `SPOTIFY_REDIRECT_URI` environment variable, falling back
/// to `http://localhost:5000/callback`. The value must match the redirect
/// URI configured in the Spotify application settings exactly.
pub fn redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI")
        .unwrap_or_else(|_| "http://localhost:5000/callback".to_string())
}
