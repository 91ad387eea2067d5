use std::sync::Arc;

use chrono::Utc;
use topspot::error::ApiError;
use topspot::management::{SessionStore, TokenManager};
use topspot::types::{SelectionContext, Token, TrackView};

fn fresh_token() -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "user-top-read".to_string(),
        expires_in: 3600,
        obtained_at: Utc::now().timestamp() as u64,
    }
}

fn selection(label: &str) -> SelectionContext {
    SelectionContext {
        label: label.to_string(),
        tracks: vec![TrackView {
            name: format!("{} track", label),
            url: "https://open.spotify.com/track/1".to_string(),
            image_url: "https://i.scdn.co/image/1".to_string(),
            uri: "spotify:track:1".to_string(),
        }],
    }
}

#[tokio::test]
async fn test_store_get_or_create() {
    let store = SessionStore::new();
    assert!(store.is_empty().await);

    let first = store.get_or_create("abc").await;
    let second = store.get_or_create("abc").await;

    // Same id resolves to the same session
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(store.len().await, 1);

    let other = store.get_or_create("def").await;
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_store_get_unknown_id() {
    let store = SessionStore::new();
    assert!(store.get("nope").await.is_none());

    store.get_or_create("abc").await;
    assert!(store.get("abc").await.is_some());
    assert!(store.get("nope").await.is_none());
}

#[tokio::test]
async fn test_store_remove_discards_session() {
    let store = SessionStore::new();

    let session = store.get_or_create("abc").await;
    session.lock().await.token = Some(fresh_token());

    store.remove("abc").await;
    assert!(store.get("abc").await.is_none());

    // A re-created session starts empty
    let recreated = store.get_or_create("abc").await;
    assert!(recreated.lock().await.token.is_none());
}

#[tokio::test]
async fn test_get_valid_token_without_token() {
    let store = SessionStore::new();
    let session = store.get_or_create("abc").await;

    let result = TokenManager::new(session).get_valid_token().await;
    assert!(matches!(result, Err(ApiError::NotAuthenticated)));
}

#[tokio::test]
async fn test_get_valid_token_fresh_token_passes_through() {
    let store = SessionStore::new();
    let session = store.get_or_create("abc").await;
    session.lock().await.token = Some(fresh_token());

    // A token inside its validity window is returned as-is, without any
    // network call
    let access = TokenManager::new(session.clone())
        .get_valid_token()
        .await
        .unwrap();
    assert_eq!(access, "access");

    // The stored record is untouched
    let data = session.lock().await;
    let stored = data.token.as_ref().unwrap();
    assert_eq!(stored.access_token, "access");
    assert_eq!(stored.refresh_token, "refresh");
}

#[tokio::test]
async fn test_selection_most_recent_wins() {
    let store = SessionStore::new();
    let session = store.get_or_create("abc").await;

    session.lock().await.selection = Some(selection("4 Weeks"));
    session.lock().await.selection = Some(selection("Year"));

    let data = session.lock().await;
    let current = data.selection.as_ref().unwrap();
    assert_eq!(current.label, "Year");
    assert_eq!(current.tracks.len(), 1);
    assert_eq!(current.tracks[0].name, "Year track");
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let store = SessionStore::new();

    let a = store.get_or_create("a").await;
    let b = store.get_or_create("b").await;

    a.lock().await.token = Some(fresh_token());

    assert!(a.lock().await.token.is_some());
    assert!(b.lock().await.token.is_none());
}
