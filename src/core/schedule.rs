// Pure timing math for the Rez scheduler.
//
// "Rez" is the user-facing repeats-per-hour of the scheduled trigger.
// The platform layer owns the actual timers; everything here is plain
// arithmetic so it can be tested natively.

use super::settings::{REZ_MAX, REZ_MIN};

pub const HOUR_MS: u32 = 3_600_000;

#[inline]
pub fn clamp_rez(rez: i32) -> i32 {
    rez.clamp(REZ_MIN, REZ_MAX)
}

/// Milliseconds from a wall-clock position inside the current hour to
/// the next hour boundary. The interval is half-open `(now, now+1h]`:
/// exactly on a boundary means the *next* boundary, a full hour away.
pub fn ms_until_next_hour(minute: u32, second: u32, millisecond: u32) -> u32 {
    let elapsed = minute * 60_000 + second * 1_000 + millisecond;
    HOUR_MS - (elapsed % HOUR_MS)
}

/// Even intra-hour period for a repeating trigger, floored.
pub fn repeat_period_ms(rez: i32) -> u32 {
    HOUR_MS / clamp_rez(rez).max(1) as u32
}

/// A scheduler arming decision: `None` means stay idle (rez of one fires
/// only the natural once-per-load trigger elsewhere).
pub fn plan(rez: i32, minute: u32, second: u32, millisecond: u32) -> Option<(u32, u32)> {
    let rez = clamp_rez(rez);
    if rez <= 1 {
        return None;
    }
    Some((
        ms_until_next_hour(minute, second, millisecond),
        repeat_period_ms(rez),
    ))
}
