// Host-side tests for the celebration particle lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod party {
        include!("../src/core/party.rs");
    }
}

use crate::core::party::*;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn make_party(seed: u64) -> Party {
    let mut rng = SmallRng::seed_from_u64(seed);
    Party::begin(Vec2::new(200.0, 150.0), 0.0, &mut rng)
}

#[test]
fn spawn_count_stays_within_bounds() {
    for seed in 0..32 {
        let party = make_party(seed);
        assert!(
            (PARTICLES_MIN..=PARTICLES_MAX).contains(&party.len()),
            "seed {seed} spawned {}",
            party.len()
        );
    }
}

#[test]
fn spawned_particles_have_bounded_attributes() {
    let party = make_party(7);
    for p in party.particles() {
        assert!((DISPERSAL_MIN_MS..=DISPERSAL_MAX_MS).contains(&p.dispersal_ms));
        assert!((ORBIT_RADIUS_MIN..=ORBIT_RADIUS_MAX).contains(&p.radius));
        assert!((WOBBLE_MIN..=WOBBLE_MAX).contains(&p.wobble));
        assert!(p.direction == 1.0 || p.direction == -1.0);
        assert!(p.dispersal_dir.x.abs() == 1.0 && p.dispersal_dir.y.abs() == 1.0);
        assert!(p.dispersal_started_at.is_none());
        assert!(!p.done);
    }
}

#[test]
fn orbiting_particles_are_fully_opaque() {
    let mut party = make_party(3);
    let count = party.len();
    let frames = party.tick(1_000.0, 5, 16);
    assert_eq!(frames.len(), count);
    for f in &frames {
        assert_eq!(f.opacity, 1.0);
        assert!(f.position.is_finite());
    }
    assert!(!party.finished(1_000.0));
}

#[test]
fn end_signal_does_not_instantly_clear_particles() {
    let mut party = make_party(11);
    let count = party.len();
    party.tick(1_000.0, 5, 16);
    party.mark_deadline(5_000.0);

    // first tick past the deadline: everyone starts dispersing, nobody is gone
    let frames = party.tick(5_000.0, 5, 16);
    assert_eq!(frames.len(), count);
    assert!(party
        .particles()
        .iter()
        .all(|p| p.dispersal_started_at == Some(5_000.0)));
    assert!(!party.finished(5_000.0));
}

#[test]
fn dispersal_is_staggered_per_particle() {
    let mut party = make_party(19);
    party.mark_deadline(5_000.0);
    party.tick(5_000.0, 5, 16);

    // midway through the dispersal window only the short-lived particles
    // are gone; each one exits on its own clock
    let mid = 5_000.0 + 2_750.0;
    let frames = party.tick(mid, 5, 16);
    let expected_done = party
        .particles()
        .iter()
        .filter(|p| p.dispersal_ms <= 2_750.0)
        .count();
    let done = party.particles().iter().filter(|p| p.done).count();
    assert_eq!(done, expected_done);
    assert_eq!(frames.len(), party.len() - done);
    for f in &frames {
        assert!(f.opacity < 1.0);
        assert!(f.opacity > 0.0);
    }
}

#[test]
fn party_finishes_only_after_every_particle_is_done() {
    let mut party = make_party(23);
    party.mark_deadline(5_000.0);
    party.tick(5_000.0, 5, 16);
    assert!(!party.finished(5_000.0));

    // beyond the longest possible window everyone must be gone
    let after = 5_000.0 + DISPERSAL_MAX_MS + 1.0;
    let frames = party.tick(after, 5, 16);
    assert!(frames.is_empty());
    assert!(party.finished(after));
}

#[test]
fn earliest_deadline_wins() {
    let mut party = make_party(5);
    party.mark_deadline(4_000.0);
    party.mark_deadline(9_000.0);
    assert!(party.deadline_passed(4_000.0));
}

#[test]
fn budget_acts_as_an_implicit_deadline() {
    let party = make_party(5);
    assert!(!party.deadline_passed(PARTY_BUDGET_MS - 1.0));
    assert!(party.deadline_passed(PARTY_BUDGET_MS));
}

#[test]
fn color_indices_follow_spawn_order() {
    let party = make_party(2);
    for (i, p) in party.particles().iter().enumerate() {
        assert_eq!(p.color_index, i);
    }
}
