// Celebration ("party") particle model.
//
// A party is a short-lived batch of butterfly sprites orbiting an anchor
// point. The platform layer owns the DOM elements and the animation-frame
// loop; this module owns the batch state and a pure per-tick step, so the
// whole lifecycle is testable with explicit timestamps and a seeded RNG.
//
// Lifecycle per particle: orbit → dispersing → done. The end signal (or
// the 60 s budget) only marks a deadline; each particle starts its own
// dispersal the first tick it observes the deadline and exits over its
// own randomized window, so the batch drains staggered rather than all
// at once.

use glam::Vec2;
use rand::Rng;

pub const PARTY_BUDGET_MS: f64 = 60_000.0;

pub const PARTICLES_MIN: usize = 8;
pub const PARTICLES_MAX: usize = 12;

pub const DISPERSAL_MIN_MS: f64 = 2_000.0;
pub const DISPERSAL_MAX_MS: f64 = 3_500.0;

// Orbit shape (CSS pixels)
pub const ORBIT_RADIUS_MIN: f32 = 40.0;
pub const ORBIT_RADIUS_MAX: f32 = 140.0;
pub const ORBIT_FLATTEN: f32 = 0.6;
pub const WOBBLE_MIN: f32 = 6.0;
pub const WOBBLE_MAX: f32 = 26.0;

// Base angular speed in rad/s at wind = 1
pub const BASE_ANGULAR_SPEED: f32 = 0.35;
// Breath maps to wobble frequency (rad/s per breath unit)
pub const BREATH_FREQ_SCALE: f32 = 0.09;

// How far a dispersing particle travels before it is gone
pub const DISPERSAL_TRAVEL: f32 = 420.0;

pub struct Particle {
    pub anchor: Vec2,
    pub phase: f32,
    pub radius: f32,
    /// Orbit direction, +1 or -1.
    pub direction: f32,
    pub wobble: f32,
    pub color_index: usize,
    pub dispersal_started_at: Option<f64>,
    pub dispersal_ms: f64,
    /// Per-axis dispersal direction, each component +1 or -1.
    pub dispersal_dir: Vec2,
    pub done: bool,
}

#[inline]
fn coin(rng: &mut impl Rng) -> f32 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

impl Particle {
    pub fn spawn(index: usize, anchor: Vec2, rng: &mut impl Rng) -> Self {
        let direction = coin(rng);
        let dx = coin(rng);
        let dy = coin(rng);
        Particle {
            anchor,
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
            radius: rng.gen_range(ORBIT_RADIUS_MIN..=ORBIT_RADIUS_MAX),
            direction,
            wobble: rng.gen_range(WOBBLE_MIN..=WOBBLE_MAX),
            color_index: index,
            dispersal_started_at: None,
            dispersal_ms: rng.gen_range(DISPERSAL_MIN_MS..=DISPERSAL_MAX_MS),
            dispersal_dir: Vec2::new(dx, dy),
            done: false,
        }
    }
}

/// One particle's contribution to a frame: where to draw it and how faded
/// it is. `index` is the particle's stable position in the batch; done
/// particles produce no frame.
#[derive(Clone, Copy, Debug)]
pub struct ParticleFrame {
    pub index: usize,
    pub position: Vec2,
    pub opacity: f32,
    pub color_index: usize,
}

pub struct Party {
    particles: Vec<Particle>,
    started_at: f64,
    deadline: Option<f64>,
}

impl Party {
    /// Spawn a fresh batch of 8–12 particles around `anchor`.
    pub fn begin(anchor: Vec2, now_ms: f64, rng: &mut impl Rng) -> Self {
        let count = rng.gen_range(PARTICLES_MIN..=PARTICLES_MAX);
        let particles = (0..count)
            .map(|i| Particle::spawn(i, anchor, rng))
            .collect();
        Party {
            particles,
            started_at: now_ms,
            deadline: None,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Record the end signal. The earliest deadline wins; particles keep
    /// animating and drain on their own schedules.
    pub fn mark_deadline(&mut self, now_ms: f64) {
        match self.deadline {
            Some(d) if d <= now_ms => {}
            _ => self.deadline = Some(now_ms),
        }
    }

    pub fn deadline_passed(&self, now_ms: f64) -> bool {
        let budget_end = self.started_at + PARTY_BUDGET_MS;
        now_ms >= self.deadline.unwrap_or(budget_end).min(budget_end)
    }

    /// Advance every particle to `now_ms` and collect draw positions.
    /// `wind` scales orbit speed, `breath` drives the wobble oscillation.
    pub fn tick(&mut self, now_ms: f64, wind: i32, breath: i32) -> Vec<ParticleFrame> {
        let deadline_passed = self.deadline_passed(now_ms);
        let t = ((now_ms - self.started_at) / 1_000.0) as f32;
        let speed = wind.max(1) as f32 * BASE_ANGULAR_SPEED;
        let wobble_freq = breath.max(1) as f32 * BREATH_FREQ_SCALE;

        let mut frames = Vec::with_capacity(self.particles.len());
        for (i, p) in self.particles.iter_mut().enumerate() {
            if p.done {
                continue;
            }
            if deadline_passed && p.dispersal_started_at.is_none() {
                p.dispersal_started_at = Some(now_ms);
            }

            let angle = p.phase + p.direction * speed * t;
            let wobble = p.wobble * (t * wobble_freq + p.phase).sin();
            let orbit = p.anchor
                + Vec2::new(angle.cos(), angle.sin() * ORBIT_FLATTEN) * p.radius
                + Vec2::new(0.0, wobble);

            let (position, opacity) = match p.dispersal_started_at {
                Some(start) => {
                    let u = ((now_ms - start) / p.dispersal_ms).clamp(0.0, 1.0) as f32;
                    if u >= 1.0 {
                        p.done = true;
                        continue;
                    }
                    (orbit + p.dispersal_dir * (u * DISPERSAL_TRAVEL), 1.0 - u)
                }
                None => (orbit, 1.0),
            };

            frames.push(ParticleFrame {
                index: i,
                position,
                opacity,
                color_index: p.color_index,
            });
        }
        frames
    }

    /// True once the deadline has passed and every particle has finished
    /// dispersing; only then may a new party begin.
    pub fn finished(&self, now_ms: f64) -> bool {
        self.deadline_passed(now_ms) && self.particles.iter().all(|p| p.done)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
