//! Share-link construction and parsing.
//!
//! A canvas is shared by appending a `canvas=<id>` query parameter to the
//! application's base URL. A client that finds the parameter in its own URL
//! enters the reduced shared view: title and drawing surface only, no
//! directory UI.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use uuid::Uuid;

/// Build a shareable URL for a canvas.
#[must_use]
pub fn share_url(base: &str, canvas_id: Uuid) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}canvas={canvas_id}")
}

/// Extract the shared canvas id from a URL query string, if present.
/// Accepts the query with or without its leading `?`.
#[must_use]
pub fn shared_canvas_param(query: &str) -> Option<Uuid> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != "canvas" {
            return None;
        }
        match Uuid::parse_str(value) {
            Ok(id) => Some(id),
            Err(_) => None,
        }
    })
}
