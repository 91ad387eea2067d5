use axum::{
    Extension,
    extract::Path,
    http::HeaderMap,
    response::Html,
};

use crate::{
    api, config,
    error::ApiError,
    management::{SessionStore, TokenManager},
    render, spotify,
    types::SelectionContext,
    utils::TimeRange,
};

/// `GET /home` - default top-items view over the 4-week window.
pub async fn home(
    Extension(store): Extension<SessionStore>,
    headers: HeaderMap,
) -> Result<Html<String>, ApiError> {
    render_top_items(&store, &headers, TimeRange::ShortTerm).await
}

/// `GET /top_items/{time_range}` - top-items view for a selected window.
/// Unknown path values fall back to the all-time window.
pub async fn top_items(
    Extension(store): Extension<SessionStore>,
    headers: HeaderMap,
    Path(time_range): Path<String>,
) -> Result<Html<String>, ApiError> {
    render_top_items(&store, &headers, TimeRange::parse(&time_range)).await
}

/// Fetches both top lists with a guaranteed-fresh token, records the track
/// selection for a later `/playlist` call, and renders the page. Either
/// upstream failure aborts the whole request; a partial page is never
/// rendered.
async fn render_top_items(
    store: &SessionStore,
    headers: &HeaderMap,
    time_range: TimeRange,
) -> Result<Html<String>, ApiError> {
    let session = api::require_session(store, headers).await?;
    let token = TokenManager::new(session.clone()).get_valid_token().await?;

    let artists =
        spotify::top_items::get_top_artists(&token, time_range, config::TOP_ITEMS_LIMIT).await?;
    let tracks =
        spotify::top_items::get_top_tracks(&token, time_range, config::TOP_ITEMS_LIMIT).await?;

    {
        let mut data = session.lock().await;
        data.selection = Some(SelectionContext {
            label: time_range.label().to_string(),
            tracks: tracks.clone(),
        });
    }

    Ok(render::top_items_page(&artists, &tracks, time_range.label()))
}
