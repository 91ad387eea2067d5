use axum::response::Html;

use crate::types::{ArtistView, TrackView};

/// Escapes text destined for HTML bodies and attribute values. Artist and
/// track names come from an external API and are untrusted.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn login_page() -> Html<String> {
    Html(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>Topspot</title></head>\n\
         <body>\n\
         <h1>Topspot</h1>\n\
         <p>See your most-played artists and tracks, and turn them into a playlist.</p>\n\
         <p><a href=\"/\">Log in with Spotify</a></p>\n\
         </body>\n\
         </html>\n"
            .to_string(),
    )
}

pub fn top_items_page(artists: &[ArtistView], tracks: &[TrackView], label: &str) -> Html<String> {
    let mut page = String::new();

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n");
    page.push_str("<head><meta charset=\"utf-8\"><title>Topspot</title></head>\n<body>\n");
    page.push_str(&format!(
        "<h1>Your Top Items - Last {}</h1>\n",
        escape(label)
    ));

    page.push_str(
        "<nav>\n\
         <a href=\"/top_items/short_term\">4 Weeks</a> |\n\
         <a href=\"/top_items/medium_term\">Month</a> |\n\
         <a href=\"/top_items/long_term\">Year</a> |\n\
         <a href=\"/playlist\">Create playlist</a> |\n\
         <a href=\"/logout\">Log out</a>\n\
         </nav>\n",
    );

    page.push_str("<h2>Artists</h2>\n<ol>\n");
    for artist in artists {
        page.push_str(&format!(
            "<li><img src=\"{img}\" alt=\"\" width=\"64\"> <a href=\"{url}\">{name}</a></li>\n",
            img = escape(&artist.image_url),
            url = escape(&artist.url),
            name = escape(&artist.name),
        ));
    }
    page.push_str("</ol>\n");

    page.push_str("<h2>Tracks</h2>\n<ol>\n");
    for track in tracks {
        page.push_str(&format!(
            "<li><img src=\"{img}\" alt=\"\" width=\"64\"> <a href=\"{url}\">{name}</a></li>\n",
            img = escape(&track.image_url),
            url = escape(&track.url),
            name = escape(&track.name),
        ));
    }
    page.push_str("</ol>\n</body>\n</html>\n");

    Html(page)
}
