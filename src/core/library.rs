// Music library manifest parsing and track URL building.
//
// The manifest is a JSON array of filename strings. Only names that look
// like mp3 files survive (case-insensitive extension, an optional query
// suffix is allowed); everything else is dropped. An empty result counts
// as failure so callers can fall back.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

pub const TRACK_DIR: &str = "music/";

// encodeURIComponent leaves these unescaped
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrackEntry {
    pub name: String,
    pub url: String,
}

/// True when `name` is a usable track filename: a non-empty stem, an
/// `.mp3` extension in any case, optionally followed by a query string.
pub fn is_track_name(name: &str) -> bool {
    let base = name.split('?').next().unwrap_or("");
    let lower = base.to_ascii_lowercase();
    lower.len() > 4 && lower.ends_with(".mp3")
}

/// Percent-encode the filename and anchor it under the track directory.
pub fn track_url(name: &str) -> String {
    format!("{}{}", TRACK_DIR, utf8_percent_encode(name, COMPONENT))
}

fn entry(name: &str) -> TrackEntry {
    TrackEntry {
        name: name.to_string(),
        url: track_url(name),
    }
}

/// Parse the manifest text into an ordered track list. `None` covers
/// every failure mode the caller treats identically: malformed JSON, a
/// non-array, or nothing left after filtering.
pub fn parse_manifest(text: &str) -> Option<Vec<TrackEntry>> {
    let names: Vec<String> = serde_json::from_str(text).ok()?;
    let tracks: Vec<TrackEntry> = names
        .iter()
        .filter(|n| is_track_name(n))
        .map(|n| entry(n))
        .collect();
    if tracks.is_empty() {
        None
    } else {
        Some(tracks)
    }
}

/// The library published when the manifest is missing, malformed, or
/// filters down to nothing. Never empty.
pub fn fallback_library() -> Vec<TrackEntry> {
    vec![entry("wind chimes.mp3"), entry("night garden.mp3")]
}
