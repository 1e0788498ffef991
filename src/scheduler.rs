//! Rez scheduler: fires the scheduled-trigger event `rez` times per hour,
//! aligned to wall-clock hour boundaries.
//!
//! One one-shot timer carries us to the next hour boundary; a repeating
//! timer with period `floor(1h / rez)` takes over from there. The two are
//! armed mutually exclusively and always cancelled as a pair. Suspension
//! is a flag, not a cancel: a suspended tick is dropped and the phase of
//! the schedule is preserved.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::bus;
use crate::core::schedule::plan;

#[derive(Default)]
pub struct RezScheduler {
    one_shot: Cell<Option<i32>>,
    repeating: Cell<Option<i32>>,
    suspended: Cell<bool>,
}

impl RezScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(RezScheduler::default())
    }

    /// Drop trigger ticks until `resume`. Timers keep running.
    pub fn suspend(&self) {
        self.suspended.set(true);
    }

    pub fn resume(&self) {
        self.suspended.set(false);
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended.get()
    }

    /// Clear both timers. Idempotent.
    pub fn cancel(&self) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(handle) = self.one_shot.take() {
            window.clear_timeout_with_handle(handle);
        }
        if let Some(handle) = self.repeating.take() {
            window.clear_interval_with_handle(handle);
        }
    }
}

/// (Re-)arm the schedule for `rez` repeats per hour. Existing timers are
/// discarded and hour alignment restarts from now; `rez <= 1` leaves the
/// scheduler idle.
pub fn schedule(scheduler: &Rc<RezScheduler>, rez: i32) {
    scheduler.cancel();
    let now = js_sys::Date::new_0();
    let Some((delay_ms, period_ms)) = plan(
        rez,
        now.get_minutes(),
        now.get_seconds(),
        now.get_milliseconds(),
    ) else {
        log::info!("[rez] idle, rez={}", rez);
        return;
    };
    log::info!(
        "[rez] next boundary in {}ms, then every {}ms",
        delay_ms,
        period_ms
    );

    let Some(window) = web::window() else {
        return;
    };
    let sched = scheduler.clone();
    let fire = Closure::wrap(Box::new(move || {
        sched.one_shot.set(None);
        if !sched.is_suspended() {
            bus::emit_scheduled_trigger();
        }
        arm_repeating(&sched, period_ms);
    }) as Box<dyn FnMut()>);
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        fire.as_ref().unchecked_ref(),
        delay_ms as i32,
    ) {
        Ok(handle) => scheduler.one_shot.set(Some(handle)),
        Err(e) => log::warn!("[rez] failed to arm one-shot: {:?}", e),
    }
    fire.forget();
}

fn arm_repeating(scheduler: &Rc<RezScheduler>, period_ms: u32) {
    let Some(window) = web::window() else {
        return;
    };
    let sched = scheduler.clone();
    let tick = Closure::wrap(Box::new(move || {
        if !sched.is_suspended() {
            bus::emit_scheduled_trigger();
        }
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        period_ms as i32,
    ) {
        Ok(handle) => scheduler.repeating.set(Some(handle)),
        Err(e) => log::warn!("[rez] failed to arm repeat: {:?}", e),
    }
    tick.forget();
}
