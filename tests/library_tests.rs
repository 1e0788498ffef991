// Host-side tests for manifest filtering and track URL building.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod library {
        include!("../src/core/library.rs");
    }
}

use crate::core::library::*;

#[test]
fn manifest_keeps_only_mp3_names() {
    let tracks = parse_manifest(r#"["a.mp3","b.txt","C.MP3?x=1"]"#).unwrap();
    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["a.mp3", "C.MP3?x=1"]);
}

#[test]
fn track_names_match_case_insensitively_with_optional_query() {
    assert!(is_track_name("a.mp3"));
    assert!(is_track_name("X.Mp3"));
    assert!(is_track_name("song.mp3?v=2"));
    assert!(!is_track_name(".mp3"));
    assert!(!is_track_name("a.mp4"));
    assert!(!is_track_name("mp3"));
    assert!(!is_track_name(""));
    assert!(!is_track_name("?a.mp3"));
}

#[test]
fn urls_are_percent_encoded_under_the_track_dir() {
    assert_eq!(track_url("a.mp3"), "music/a.mp3");
    assert_eq!(track_url("wind chimes.mp3"), "music/wind%20chimes.mp3");
    assert_eq!(track_url("C.MP3?x=1"), "music/C.MP3%3Fx%3D1");
}

#[test]
fn empty_or_malformed_manifests_are_failures() {
    assert!(parse_manifest("[]").is_none());
    assert!(parse_manifest(r#"["b.txt","c.wav"]"#).is_none());
    assert!(parse_manifest("not json").is_none());
    assert!(parse_manifest(r#"{"a": 1}"#).is_none());
    assert!(parse_manifest(r#"[1, 2, 3]"#).is_none());
}

#[test]
fn manifest_order_is_preserved() {
    let tracks = parse_manifest(r#"["z.mp3","a.mp3","m.mp3"]"#).unwrap();
    let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["z.mp3", "a.mp3", "m.mp3"]);
}

#[test]
fn fallback_library_is_never_empty_and_well_formed() {
    let tracks = fallback_library();
    assert_eq!(tracks.len(), 2);
    for t in &tracks {
        assert!(is_track_name(&t.name));
        assert!(t.url.starts_with(TRACK_DIR));
        assert!(!t.url.contains(' '));
    }
}
