use std::fmt;

use axum::http::{HeaderMap, header};
use rand::{Rng, distr::Alphanumeric};

/// Name of the cookie carrying the opaque session id.
pub const SESSION_COOKIE: &str = "topspot_session";

/// The look-back window Spotify uses to compute "top" items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    /// Unknown values fall back to the all-time window.
    pub fn parse(s: &str) -> Self {
        match s {
            "short_term" => TimeRange::ShortTerm,
            "medium_term" => TimeRange::MediumTerm,
            _ => TimeRange::LongTerm,
        }
    }

    /// Human-readable label shown in pages and playlist names.
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "4 Weeks",
            TimeRange::MediumTerm => "Month",
            TimeRange::LongTerm => "Year",
        }
    }
}

impl fmt::Display for TimeRange {
    /// The `time_range` query value the Web API expects.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        };
        write!(f, "{}", s)
    }
}

pub fn generate_session_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

pub fn generate_login_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Extracts the session id from the request's `Cookie` header, if any.
/// Tolerates multiple cookies and malformed segments.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    for segment in raw.split(';') {
        if let Some((name, value)) = segment.trim().split_once('=') {
            if name == SESSION_COOKIE && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// `Set-Cookie` value establishing the session. The cookie only carries an
/// opaque id; the token itself never leaves the server.
pub fn session_cookie(id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

/// `Set-Cookie` value that expires the session cookie on logout.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}
