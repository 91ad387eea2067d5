use serde::{Deserialize, Serialize};

/// OAuth token pair for one user session. Replaced in place on refresh,
/// discarded on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    pub fn expires_at(&self) -> u64 {
        self.obtained_at + self.expires_in
    }

    /// A token whose validity window has elapsed must not be sent upstream.
    /// No clock-skew compensation.
    pub fn is_expired(&self, now: u64) -> bool {
        now >= self.expires_at()
    }
}

/// Raw token-endpoint response. Spotify omits `refresh_token` on refresh
/// when the old one stays valid, so it is optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    pub expires_in: u64,
}

/// The last-viewed time window and its track list, kept so `/playlist`
/// can reuse the previous query's results. Most recent query wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionContext {
    pub label: String,
    pub tracks: Vec<TrackView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistView {
    pub name: String,
    pub url: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackView {
    pub name: String,
    pub url: String,
    pub image_url: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopArtistsResponse {
    pub items: Vec<ArtistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistItem {
    pub name: String,
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl ArtistItem {
    pub fn into_view(self) -> ArtistView {
        ArtistView {
            name: self.name,
            url: self.external_urls.spotify,
            image_url: self.images.into_iter().next().map(|i| i.url).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub name: String,
    pub uri: String,
    pub external_urls: ExternalUrls,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub images: Vec<Image>,
}

impl TrackItem {
    pub fn into_view(self) -> TrackView {
        TrackView {
            name: self.name,
            url: self.external_urls.spotify,
            image_url: self.album.images.into_iter().next().map(|i| i.url).unwrap_or_default(),
            uri: self.uri,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackRequest {
    pub uris: Vec<String>,
    pub position: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackResponse {
    pub snapshot_id: String,
}
