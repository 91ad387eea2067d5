use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use thiserror::Error;

/// Everything a request handler can fail with. Nothing here is fatal to
/// the process; each value maps to a response for the one request that
/// triggered it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No token in the session. Mapped to a redirect into the login flow.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The token endpoint rejected an exchange or refresh, or the
    /// response was unusable. Exactly one attempt is made, no retry.
    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    /// An outbound resource-API call failed (network error or non-success
    /// status).
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// `/playlist` was called before any top-items query populated the
    /// selection context.
    #[error("no top tracks selected yet; visit /home first")]
    NoSelection,

    /// The provider redirected back without an authorization code.
    #[error("missing authorization code")]
    MissingCode,

    /// The `state` parameter on the callback did not match the one issued
    /// at login.
    #[error("login state mismatch")]
    StateMismatch,

    /// The provider reported an authorization error on the callback.
    #[error("authorization denied: {0}")]
    AuthorizationDenied(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotAuthenticated => return Redirect::to("/").into_response(),
            ApiError::NoSelection
            | ApiError::MissingCode
            | ApiError::StateMismatch
            | ApiError::AuthorizationDenied(_) => StatusCode::BAD_REQUEST,
            ApiError::TokenExchange(_) | ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
