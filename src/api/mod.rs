//! # API Module
//!
//! HTTP route handlers for the web application. Each handler receives the
//! shared [`SessionStore`](crate::management::SessionStore) through an
//! axum `Extension` and an explicit session resolved from the request's
//! cookie — there is no ambient session state.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - begins the OAuth flow: establishes a session, stores a
//!   login-state nonce, and redirects to the provider authorize URL
//! - [`callback`] - receives the authorization code, verifies the nonce,
//!   exchanges the code for a token pair, and redirects to `/home`
//! - [`logout`] - discards the session and renders the login page
//!
//! ### Views
//!
//! - [`home`] - default top-items view over the 4-week window
//! - [`top_items`] - top-items view for a selected time window
//!
//! ### Actions
//!
//! - [`create_playlist`] - creates a playlist from the last-viewed track
//!   selection
//!
//! ### Monitoring
//!
//! - [`health`] - application status and version for deployment checks

mod auth;
mod health;
mod playlist;
mod top_items;

pub use auth::callback;
pub use auth::login;
pub use auth::logout;
pub use health::health;
pub use playlist::create_playlist;
pub use top_items::home;
pub use top_items::top_items;

use axum::http::HeaderMap;

use crate::{error::ApiError, management::{SessionHandle, SessionStore}, utils};

/// Resolves the request's session from its cookie. A missing cookie or an
/// unknown id means the user never went through login on this store.
pub(crate) async fn require_session(
    store: &SessionStore,
    headers: &HeaderMap,
) -> Result<SessionHandle, ApiError> {
    let id = utils::session_id_from_headers(headers).ok_or(ApiError::NotAuthenticated)?;
    store.get(&id).await.ok_or(ApiError::NotAuthenticated)
}
