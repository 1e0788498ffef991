// Host-side tests for Rez timing math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod settings {
        include!("../src/core/settings.rs");
    }
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
}

use crate::core::schedule::*;

#[test]
fn twenty_three_minutes_to_the_top_of_the_hour() {
    // 14:37:00.000 -> 15:00 is 23 minutes away
    assert_eq!(ms_until_next_hour(37, 0, 0), 23 * 60_000);
}

#[test]
fn exact_boundary_waits_a_full_hour() {
    assert_eq!(ms_until_next_hour(0, 0, 0), HOUR_MS);
}

#[test]
fn one_millisecond_before_the_boundary() {
    assert_eq!(ms_until_next_hour(59, 59, 999), 1);
}

#[test]
fn repeat_period_divides_the_hour_evenly() {
    assert_eq!(repeat_period_ms(4), 900_000);
    assert_eq!(repeat_period_ms(2), 1_800_000);
    assert_eq!(repeat_period_ms(6), 600_000);
}

#[test]
fn rez_of_one_means_no_repeating_timer() {
    assert_eq!(plan(1, 37, 0, 0), None);
    assert_eq!(plan(0, 37, 0, 0), None);
    assert_eq!(plan(-5, 37, 0, 0), None);
}

#[test]
fn plan_arms_one_shot_then_repeat() {
    assert_eq!(plan(4, 37, 0, 0), Some((23 * 60_000, 900_000)));
    assert_eq!(plan(2, 37, 0, 0), Some((23 * 60_000, 1_800_000)));
}

#[test]
fn plan_clamps_out_of_range_rez() {
    // anything above the bound behaves like the maximum
    assert_eq!(plan(99, 0, 0, 0), Some((HOUR_MS, 600_000)));
}
