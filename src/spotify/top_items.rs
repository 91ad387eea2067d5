use crate::{
    config,
    error::ApiError,
    spotify,
    types::{ArtistView, TopArtistsResponse, TopTracksResponse, TrackView},
    utils::TimeRange,
};

/// Retrieves the user's most-played artists for a time window.
///
/// Fetches `GET /me/top/artists` and shapes each item down to the fields
/// the views consume: name, external URL, and first image URL. Artists
/// without images get an empty image URL rather than failing the page.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `time_range` - Look-back window the provider computes "top" over
/// * `limit` - Maximum number of artists to return (1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<ArtistView>)` - Shaped artist entries, most-played first
/// - `Err(ApiError::Upstream)` - Network error or non-success status
pub async fn get_top_artists(
    token: &str,
    time_range: TimeRange,
    limit: u8,
) -> Result<Vec<ArtistView>, ApiError> {
    let api_url = format!(
        "{uri}/me/top/artists?time_range={time_range}&offset=0&limit={limit}",
        uri = config::SPOTIFY_API_URL,
        time_range = time_range,
        limit = limit
    );

    let client = spotify::http_client();
    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let response = res.json::<TopArtistsResponse>().await?;

    Ok(response.items.into_iter().map(|item| item.into_view()).collect())
}

/// Retrieves the user's most-played tracks for a time window.
///
/// Fetches `GET /me/top/tracks` and shapes each item down to name,
/// external URL, album image URL, and track URI. The URI is what
/// playlist creation later feeds back to the API.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `time_range` - Look-back window the provider computes "top" over
/// * `limit` - Maximum number of tracks to return (1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<TrackView>)` - Shaped track entries, most-played first
/// - `Err(ApiError::Upstream)` - Network error or non-success status
pub async fn get_top_tracks(
    token: &str,
    time_range: TimeRange,
    limit: u8,
) -> Result<Vec<TrackView>, ApiError> {
    let api_url = format!(
        "{uri}/me/top/tracks?time_range={time_range}&offset=0&limit={limit}",
        uri = config::SPOTIFY_API_URL,
        time_range = time_range,
        limit = limit
    );

    let client = spotify::http_client();
    let res = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let response = res.json::<TopTracksResponse>().await?;

    Ok(response.items.into_iter().map(|item| item.into_view()).collect())
}
