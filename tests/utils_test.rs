use axum::http::{HeaderMap, HeaderValue, header};
use topspot::render;
use topspot::spotify::auth::{authorize_url, basic_auth_header};
use topspot::types::{ArtistView, Token, TokenResponse, TrackView};
use topspot::utils::*;

// Helper function to create a header map carrying a Cookie header
fn headers_with_cookie(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
    headers
}

fn test_token(expires_in: u64, obtained_at: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "user-top-read".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_time_range_parse() {
    assert_eq!(TimeRange::parse("short_term"), TimeRange::ShortTerm);
    assert_eq!(TimeRange::parse("medium_term"), TimeRange::MediumTerm);
    assert_eq!(TimeRange::parse("long_term"), TimeRange::LongTerm);

    // Anything unknown falls back to the all-time window
    assert_eq!(TimeRange::parse("anything_else"), TimeRange::LongTerm);
    assert_eq!(TimeRange::parse(""), TimeRange::LongTerm);
    assert_eq!(TimeRange::parse("SHORT_TERM"), TimeRange::LongTerm);
}

#[test]
fn test_time_range_label() {
    assert_eq!(TimeRange::ShortTerm.label(), "4 Weeks");
    assert_eq!(TimeRange::MediumTerm.label(), "Month");
    assert_eq!(TimeRange::LongTerm.label(), "Year");

    // The fallback branch maps to the "Year" label
    assert_eq!(TimeRange::parse("anything_else").label(), "Year");
}

#[test]
fn test_time_range_display() {
    assert_eq!(TimeRange::ShortTerm.to_string(), "short_term");
    assert_eq!(TimeRange::MediumTerm.to_string(), "medium_term");
    assert_eq!(TimeRange::LongTerm.to_string(), "long_term");
}

#[test]
fn test_generate_session_id() {
    let id = generate_session_id();

    // Should be exactly 64 characters
    assert_eq!(id.len(), 64);

    // Should contain only alphanumeric characters
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated ids should be different
    let id2 = generate_session_id();
    assert_ne!(id, id2);
}

#[test]
fn test_generate_login_state() {
    let state = generate_login_state();

    assert_eq!(state.len(), 32);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(state, generate_login_state());
}

#[test]
fn test_session_id_from_headers() {
    // Plain single cookie
    let headers = headers_with_cookie("topspot_session=abc123");
    assert_eq!(session_id_from_headers(&headers), Some("abc123".to_string()));

    // Multiple cookies, ours in the middle
    let headers = headers_with_cookie("other=1; topspot_session=abc123; theme=dark");
    assert_eq!(session_id_from_headers(&headers), Some("abc123".to_string()));

    // Missing header
    let headers = HeaderMap::new();
    assert_eq!(session_id_from_headers(&headers), None);

    // Cookie header without our cookie
    let headers = headers_with_cookie("other=1; theme=dark");
    assert_eq!(session_id_from_headers(&headers), None);

    // Malformed segments are skipped, valid one still found
    let headers = headers_with_cookie("garbage; =; topspot_session=abc123");
    assert_eq!(session_id_from_headers(&headers), Some("abc123".to_string()));

    // Empty value counts as absent
    let headers = headers_with_cookie("topspot_session=");
    assert_eq!(session_id_from_headers(&headers), None);
}

#[test]
fn test_session_cookie_format() {
    let cookie = session_cookie("abc123");
    assert!(cookie.starts_with("topspot_session=abc123"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));

    let cleared = clear_session_cookie();
    assert!(cleared.starts_with("topspot_session="));
    assert!(cleared.contains("Max-Age=0"));
}

#[test]
fn test_token_expiry() {
    let token = test_token(3600, 1_000_000);

    assert_eq!(token.expires_at(), 1_003_600);

    // Inside the validity window
    assert!(!token.is_expired(1_000_000));
    assert!(!token.is_expired(1_003_599));

    // The boundary itself is already stale
    assert!(token.is_expired(1_003_600));
    assert!(token.is_expired(1_003_601));
}

#[test]
fn test_token_response_refresh_token_optional() {
    // Exchange responses carry the full pair
    let full: TokenResponse = serde_json::from_str(
        r#"{"access_token":"a","refresh_token":"r","scope":"s","expires_in":3600}"#,
    )
    .unwrap();
    assert_eq!(full.refresh_token.as_deref(), Some("r"));

    // Refresh responses may omit refresh_token and scope
    let partial: TokenResponse =
        serde_json::from_str(r#"{"access_token":"a","expires_in":3600}"#).unwrap();
    assert_eq!(partial.access_token, "a");
    assert!(partial.refresh_token.is_none());
    assert!(partial.scope.is_none());
}

#[test]
fn test_basic_auth_header() {
    // base64("id:secret") == "aWQ6c2VjcmV0"
    assert_eq!(basic_auth_header("id", "secret"), "Basic aWQ6c2VjcmV0");

    // Header must never contain the raw secret
    let header = basic_auth_header("client", "hunter2");
    assert!(!header.contains("hunter2"));
}

#[test]
fn test_authorize_url() {
    let url = authorize_url(
        "client123",
        "http://localhost:5000/callback",
        "user-top-read playlist-modify-public",
        "n0nce",
    );

    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(url.contains("client_id=client123"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("state=n0nce"));

    // redirect_uri and scope must be percent-encoded
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A5000%2Fcallback"));
    assert!(!url.contains("user-top-read playlist-modify-public"));
}

#[test]
fn test_render_escapes_untrusted_names() {
    let artists = vec![ArtistView {
        name: "<script>alert(1)</script>".to_string(),
        url: "https://open.spotify.com/artist/1".to_string(),
        image_url: "https://i.scdn.co/image/1".to_string(),
    }];
    let tracks = vec![TrackView {
        name: "Tom & Jerry".to_string(),
        url: "https://open.spotify.com/track/1".to_string(),
        image_url: "https://i.scdn.co/image/2".to_string(),
        uri: "spotify:track:1".to_string(),
    }];

    let page = render::top_items_page(&artists, &tracks, "4 Weeks").0;

    assert!(!page.contains("<script>alert(1)</script>"));
    assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(page.contains("Tom &amp; Jerry"));
    assert!(page.contains("Last 4 Weeks"));
}

#[test]
fn test_escape() {
    assert_eq!(render::escape("plain"), "plain");
    assert_eq!(
        render::escape(r#"<a href="x">&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
    );
}
