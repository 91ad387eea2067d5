use axum::{
    Extension,
    extract::Query,
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::{
    api, config,
    error::ApiError,
    management::SessionStore,
    render, spotify, utils, warning,
};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

/// `GET /` - begins the login flow.
///
/// Reuses the browser's existing session when one is presented so the
/// callback can find the login state, otherwise mints a fresh session id.
/// The state nonce is stored before the redirect is issued.
pub async fn login(
    Extension(store): Extension<SessionStore>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let id = utils::session_id_from_headers(&headers)
        .unwrap_or_else(utils::generate_session_id);
    let session = store.get_or_create(&id).await;

    let state = utils::generate_login_state();
    {
        let mut data = session.lock().await;
        data.login_state = Some(state.clone());
    }

    let auth_url = spotify::auth::authorize_url(
        &config::client_id(),
        &config::redirect_uri(),
        config::SPOTIFY_SCOPE,
        &state,
    );

    (
        [(header::SET_COOKIE, utils::session_cookie(&id))],
        Redirect::to(&auth_url),
    )
}

/// `GET /callback` - completes the login flow.
///
/// Verifies the state nonce against the one issued at login (it is
/// consumed either way, so a nonce is good for one attempt), exchanges
/// the authorization code, and stores the resulting token pair into the
/// session. Any payload from a previous login is dropped first.
pub async fn callback(
    Extension(store): Extension<SessionStore>,
    headers: HeaderMap,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, ApiError> {
    let session = api::require_session(&store, &headers).await?;

    if let Some(reason) = params.error {
        warning!("Authorization callback reported an error: {}", reason);
        return Err(ApiError::AuthorizationDenied(reason));
    }

    let code = params.code.ok_or(ApiError::MissingCode)?;

    {
        let mut data = session.lock().await;
        let Some(expected) = data.login_state.take() else {
            return Err(ApiError::StateMismatch);
        };
        if params.state.as_deref() != Some(expected.as_str()) {
            return Err(ApiError::StateMismatch);
        }
        // fresh login; drop whatever the previous one left behind
        data.token = None;
        data.selection = None;
    }

    let token = spotify::auth::exchange_code(&code).await.map_err(|e| {
        warning!("Token exchange failed: {}", e);
        e
    })?;

    session.lock().await.token = Some(token);

    Ok(Redirect::to("/home"))
}

/// `GET /logout` - discards the session, token included, and clears the
/// cookie.
pub async fn logout(
    Extension(store): Extension<SessionStore>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Some(id) = utils::session_id_from_headers(&headers) {
        store.remove(&id).await;
    }

    (
        [(header::SET_COOKIE, utils::clear_session_cookie())],
        render::login_page(),
    )
}
