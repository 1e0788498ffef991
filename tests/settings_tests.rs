// Host-side tests for settings clamping and the shared parameter
// namespace. The main crate is wasm-only, so we include the pure-Rust
// modules directly.

#![allow(dead_code)]
mod core {
    pub mod settings {
        include!("../src/core/settings.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::core::settings::*;
use crate::core::state::SharedParams;

#[test]
fn defaults_are_in_bounds() {
    let s = Settings::default();
    assert_eq!(s.wind, 5);
    assert_eq!(s.breath, 16);
    assert_eq!(s.elegra, 15);
    assert_eq!(s.rez, 1);
}

#[test]
fn out_of_bounds_fields_are_clamped() {
    let s = Settings::from_json(r#"{"wind":99,"breath":0,"elegra":100,"rez":-3}"#);
    assert_eq!(s.wind, WIND_MAX);
    assert_eq!(s.breath, BREATH_MIN);
    assert_eq!(s.elegra, ELEGRA_MAX);
    assert_eq!(s.rez, REZ_MIN);
}

#[test]
fn non_numeric_and_missing_fields_fall_back_to_defaults() {
    let s = Settings::from_json(r#"{"wind":"fast","rez":4}"#);
    assert_eq!(s.wind, WIND_DEFAULT);
    assert_eq!(s.breath, BREATH_DEFAULT);
    assert_eq!(s.elegra, ELEGRA_DEFAULT);
    assert_eq!(s.rez, 4);
}

#[test]
fn garbage_storage_content_never_fails() {
    for text in ["", "not json", "[1,2,3]", "null", "\"wind\""] {
        assert_eq!(Settings::from_json(text), Settings::default());
    }
}

#[test]
fn every_loaded_field_is_within_its_documented_bounds() {
    let cases = [
        r#"{"wind":-1e9,"breath":1e9,"elegra":2.5,"rez":3.7}"#,
        r#"{"wind":null,"breath":true,"elegra":[],"rez":{}}"#,
        r#"{"wind":10,"breath":30,"elegra":8,"rez":6}"#,
    ];
    for text in cases {
        let s = Settings::from_json(text);
        assert!((WIND_MIN..=WIND_MAX).contains(&s.wind));
        assert!((BREATH_MIN..=BREATH_MAX).contains(&s.breath));
        assert!((ELEGRA_MIN..=ELEGRA_MAX).contains(&s.elegra));
        assert!((REZ_MIN..=REZ_MAX).contains(&s.rez));
    }
}

#[test]
fn clamped_rejects_non_finite_input() {
    let s = Settings::clamped(f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::NAN);
    assert_eq!(s, Settings::default());
}

#[test]
fn clamped_rounds_fractional_input() {
    let s = Settings::clamped(4.6, 15.4, 15.0, 2.2);
    assert_eq!(s.wind, 5);
    assert_eq!(s.breath, 15);
    assert_eq!(s.rez, 2);
}

#[test]
fn json_round_trip_preserves_values() {
    let s = Settings::clamped(7.0, 20.0, 12.0, 3.0);
    assert_eq!(Settings::from_json(&s.to_json()), s);
}

#[test]
fn shared_params_initialize_once() {
    let shared = SharedParams::default();
    let first = Settings::clamped(7.0, 20.0, 12.0, 3.0);
    shared.ensure_initialized(&first);
    assert_eq!(shared.snapshot(), first);

    // a second boot must not clobber live values
    shared.ensure_initialized(&Settings::default());
    assert_eq!(shared.snapshot(), first);
}

#[test]
fn shared_params_apply_overwrites_all_fields() {
    let shared = SharedParams::default();
    shared.ensure_initialized(&Settings::default());
    let next = Settings::clamped(9.0, 25.0, 10.0, 5.0);
    shared.apply(&next);
    assert_eq!(shared.snapshot(), next);
}

#[test]
fn shared_params_read_defaults_before_initialization() {
    let shared = SharedParams::default();
    assert_eq!(shared.wind(), WIND_DEFAULT);
    assert_eq!(shared.rez(), REZ_DEFAULT);
}
