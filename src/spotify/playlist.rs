use crate::{
    config,
    error::ApiError,
    spotify,
    types::{AddTrackRequest, AddTrackResponse, CreatePlaylistRequest, CreatePlaylistResponse},
};

/// Creates a public playlist owned by the given user.
///
/// Performs one POST to `/users/{user_id}/playlists`. The caller supplies
/// the display name and description; the id in the response is what the
/// subsequent add-track calls target.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `user_id` - Owner of the new playlist, from the current-user lookup
/// * `name` - Playlist display name
/// * `description` - Playlist description shown in clients
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CreatePlaylistResponse)` - Id and name of the created playlist
/// - `Err(ApiError::Upstream)` - Network error or non-success status
pub async fn create(
    token: &str,
    user_id: &str,
    name: String,
    description: String,
) -> Result<CreatePlaylistResponse, ApiError> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = config::SPOTIFY_API_URL,
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name,
        description,
        public: true,
    };

    let client = spotify::http_client();
    let res = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    let playlist = res.json::<CreatePlaylistResponse>().await?;

    Ok(playlist)
}

/// Inserts a single track URI into a playlist at an explicit position.
///
/// The playlist route calls this once per selected track with strictly
/// increasing positions starting at 0, preserving the on-page order.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Target playlist, from [`create`]
/// * `uri` - Spotify track URI to insert
/// * `position` - Zero-based insertion index
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(AddTrackResponse)` - Snapshot id after the insertion
/// - `Err(ApiError::Upstream)` - Network error or non-success status
pub async fn add_track(
    token: &str,
    playlist_id: &str,
    uri: &str,
    position: u64,
) -> Result<AddTrackResponse, ApiError> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = config::SPOTIFY_API_URL,
        playlist_id = playlist_id
    );

    let body = AddTrackRequest {
        uris: vec![uri.to_string()],
        position,
    };

    let client = spotify::http_client();
    let res = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    let snapshot = res.json::<AddTrackResponse>().await?;

    Ok(snapshot)
}
