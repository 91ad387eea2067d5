use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use url::form_urlencoded;

use crate::{
    config,
    error::ApiError,
    spotify,
    types::{Token, TokenResponse},
};

/// Builds the provider authorize URL the login route redirects to.
///
/// All parameters are percent-encoded. The `state` nonce is generated per
/// login attempt, stored in the session, and checked once on callback.
///
/// # Arguments
///
/// * `client_id` - Registered Spotify application client ID
/// * `redirect_uri` - Callback URI registered with the application
/// * `scope` - Space-separated permission scopes to request
/// * `state` - Opaque nonce tying the callback to this login attempt
///
/// # Example
///
/// ```
/// let url = authorize_url("abc123", "http://localhost:5000/callback", "user-top-read", "n0nce");
/// assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
/// ```
pub fn authorize_url(client_id: &str, redirect_uri: &str, scope: &str, state: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", client_id)
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("scope", scope)
        .append_pair("state", state)
        .finish();

    format!("{}?{}", config::SPOTIFY_AUTH_URL, query)
}

/// HTTP Basic header value for the token endpoint:
/// `Basic base64(client_id:client_secret)`.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", credentials)
}

/// Exchanges an authorization code for a token pair.
///
/// Performs one POST to the token endpoint with
/// `grant_type=authorization_code`, the code, the registered redirect URI,
/// and the client credentials in the Basic header. The resulting
/// [`Token`] carries `obtained_at` set to call time so staleness can be
/// computed later.
///
/// # Arguments
///
/// * `code` - Authorization code received via the redirect callback
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Complete token with access token, refresh token,
///   granted scope, and expiration metadata
/// - `Err(ApiError::TokenExchange)` - Non-success status, network error,
///   or a response missing required fields
///
/// # Error Handling
///
/// The code is single-use and short-lived; a rejected exchange is not
/// retried. The response body is folded into the error message to aid
/// debugging without logging credentials.
pub async fn exchange_code(code: &str) -> Result<Token, ApiError> {
    let redirect_uri = config::redirect_uri();

    let client = spotify::http_client();
    let res = client
        .post(config::SPOTIFY_TOKEN_URL)
        .header(
            "Authorization",
            basic_auth_header(&config::client_id(), &config::client_secret()),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| ApiError::TokenExchange(e.to_string()))?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::TokenExchange(format!("{} - {}", status, body)));
    }

    let response: TokenResponse = res
        .json()
        .await
        .map_err(|e| ApiError::TokenExchange(e.to_string()))?;

    let refresh_token = response
        .refresh_token
        .ok_or_else(|| ApiError::TokenExchange("response missing refresh_token".to_string()))?;

    Ok(Token {
        access_token: response.access_token,
        refresh_token,
        scope: response.scope.unwrap_or_default(),
        expires_in: response.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

/// Exchanges a refresh token for a new access token.
///
/// Performs one POST to the token endpoint with
/// `grant_type=refresh_token` and the client credentials in the Basic
/// header. Spotify may omit the refresh token from the response when the
/// old one stays valid; in that case the passed-in value is carried over
/// so the session always holds a usable pair.
///
/// # Arguments
///
/// * `refresh_token` - Valid refresh token obtained from a previous
///   exchange or refresh
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - New token with fresh access token and updated
///   expiration, `obtained_at` set to call time
/// - `Err(ApiError::TokenExchange)` - Non-success status or network error
///
/// # Error Handling
///
/// Exactly one attempt is made, with no retry or backoff; the caller
/// surfaces the failure to the request that triggered the refresh.
pub async fn refresh_access_token(refresh_token: &str) -> Result<Token, ApiError> {
    let client = spotify::http_client();
    let res = client
        .post(config::SPOTIFY_TOKEN_URL)
        .header(
            "Authorization",
            basic_auth_header(&config::client_id(), &config::client_secret()),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| ApiError::TokenExchange(e.to_string()))?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::TokenExchange(format!("{} - {}", status, body)));
    }

    let response: TokenResponse = res
        .json()
        .await
        .map_err(|e| ApiError::TokenExchange(e.to_string()))?;

    Ok(Token {
        access_token: response.access_token,
        refresh_token: response
            .refresh_token
            .unwrap_or_else(|| refresh_token.to_string()),
        scope: response.scope.unwrap_or_default(),
        expires_in: response.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
