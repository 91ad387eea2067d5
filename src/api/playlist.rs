use axum::{Extension, Json, http::HeaderMap};
use serde_json::{Value, json};

use crate::{
    api,
    error::ApiError,
    management::{SessionStore, TokenManager},
    spotify, success,
};

/// `GET /playlist` - creates a playlist from the last-viewed selection.
///
/// Requires a prior top-items query in this session; without one the
/// request fails with an explicit error instead of creating an empty
/// playlist. Tracks are inserted one call each, positions 0..N in page
/// order.
pub async fn create_playlist(
    Extension(store): Extension<SessionStore>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let session = api::require_session(&store, &headers).await?;
    let token = TokenManager::new(session.clone()).get_valid_token().await?;

    let selection = session
        .lock()
        .await
        .selection
        .clone()
        .ok_or(ApiError::NoSelection)?;

    let user_id = spotify::user::get_current_user_id(&token).await?;

    let name = format!("Top Tracks - Last {}", selection.label);
    let description = format!("Your favourite tracks in the last {}", selection.label);
    let playlist = spotify::playlist::create(&token, &user_id, name, description).await?;

    for (position, track) in selection.tracks.iter().enumerate() {
        spotify::playlist::add_track(&token, &playlist.id, &track.uri, position as u64).await?;
    }

    success!(
        "Created playlist {} with {} tracks",
        playlist.name,
        selection.tracks.len()
    );

    Ok(Json(json!({ "message": "Playlist created successfully" })))
}
