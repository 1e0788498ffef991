// Bounded animation settings persisted as a single JSON blob.
//
// Every constructor clamps, so a `Settings` value always holds finite
// integers within the documented ranges. Corrupt or partial storage
// content degrades per-field to the defaults and never errors.

use serde::{Deserialize, Serialize};

pub const WIND_MIN: i32 = 1;
pub const WIND_MAX: i32 = 10;
pub const WIND_DEFAULT: i32 = 5;

pub const BREATH_MIN: i32 = 6;
pub const BREATH_MAX: i32 = 30;
pub const BREATH_DEFAULT: i32 = 16;

pub const ELEGRA_MIN: i32 = 8;
pub const ELEGRA_MAX: i32 = 30;
pub const ELEGRA_DEFAULT: i32 = 15;

pub const REZ_MIN: i32 = 1;
pub const REZ_MAX: i32 = 6;
pub const REZ_DEFAULT: i32 = 1;

/// The four user-facing parameters. `elegra` is carried for UI
/// compatibility and round-tripped through storage, but nothing
/// downstream reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub wind: i32,
    pub breath: i32,
    pub elegra: i32,
    pub rez: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            wind: WIND_DEFAULT,
            breath: BREATH_DEFAULT,
            elegra: ELEGRA_DEFAULT,
            rez: REZ_DEFAULT,
        }
    }
}

#[inline]
fn clamp_field(value: f64, min: i32, max: i32, default: i32) -> i32 {
    if !value.is_finite() {
        return default;
    }
    (value.round() as i64).clamp(min as i64, max as i64) as i32
}

impl Settings {
    /// Build a settings value from raw (possibly user-typed) numbers.
    /// Non-finite input becomes the field default; everything else is
    /// clamped into range.
    pub fn clamped(wind: f64, breath: f64, elegra: f64, rez: f64) -> Self {
        Settings {
            wind: clamp_field(wind, WIND_MIN, WIND_MAX, WIND_DEFAULT),
            breath: clamp_field(breath, BREATH_MIN, BREATH_MAX, BREATH_DEFAULT),
            elegra: clamp_field(elegra, ELEGRA_MIN, ELEGRA_MAX, ELEGRA_DEFAULT),
            rez: clamp_field(rez, REZ_MIN, REZ_MAX, REZ_DEFAULT),
        }
    }

    /// Parse persisted JSON. Never fails: missing fields, wrong types,
    /// out-of-range values and outright garbage all resolve per-field to
    /// the defaults.
    pub fn from_json(text: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(_) => return Settings::default(),
        };
        let field = |name: &str| value.get(name).and_then(|v| v.as_f64()).unwrap_or(f64::NAN);
        Settings::clamped(
            field("wind"),
            field("breath"),
            field("elegra"),
            field("rez"),
        )
    }

    pub fn to_json(&self) -> String {
        // serializing four integers cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}
