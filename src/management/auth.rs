use chrono::Utc;

use crate::{error::ApiError, management::SessionHandle, spotify};

/// Supplies a guaranteed-fresh bearer token for one session, refreshing
/// transparently when the stored token's validity window has elapsed.
pub struct TokenManager {
    session: SessionHandle,
}

impl TokenManager {
    pub fn new(session: SessionHandle) -> Self {
        TokenManager { session }
    }

    /// Returns an access token that is valid at return time.
    ///
    /// The session lock is held across the staleness check and the refresh
    /// call, so concurrent requests from the same user serialize here and
    /// a stale token is refreshed exactly once. The refresh itself is a
    /// single attempt; a failure surfaces as [`ApiError::TokenExchange`]
    /// and leaves the stored token untouched.
    pub async fn get_valid_token(&self) -> Result<String, ApiError> {
        let mut data = self.session.lock().await;

        let Some(token) = data.token.as_ref() else {
            return Err(ApiError::NotAuthenticated);
        };

        let now = Utc::now().timestamp() as u64;
        if !token.is_expired(now) {
            return Ok(token.access_token.clone());
        }

        let refresh_token = token.refresh_token.clone();
        let fresh = spotify::auth::refresh_access_token(&refresh_token).await?;
        let access_token = fresh.access_token.clone();
        data.token = Some(fresh);

        Ok(access_token)
    }
}
