use crate::{config, error::ApiError, spotify, types::CurrentUserResponse};

/// Retrieves the authenticated user's id, needed as the owner path
/// segment when creating a playlist.
pub async fn get_current_user_id(token: &str) -> Result<String, ApiError> {
    let api_url = format!("{uri}/me", uri = config::SPOTIFY_API_URL);

    let client = spotify::http_client();
    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let user = res.json::<CurrentUserResponse>().await?;

    Ok(user.id)
}
