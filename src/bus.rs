// Typed in-process pub/sub over DOM `CustomEvent`s.
//
// The four cross-component signals keep their fire-and-forget,
// many-subscriber semantics but are only reachable from Rust through
// these typed emit/subscribe pairs. The event names are part of the
// host-page interface: pages dispatch `celebration-begin`/`-end` on
// `window` and listen for `settings-changed`/`scheduled-trigger` with
// plain `addEventListener`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::core::Settings;

pub const SETTINGS_CHANGED: &str = "settings-changed";
pub const SCHEDULED_TRIGGER: &str = "scheduled-trigger";
pub const CELEBRATION_BEGIN: &str = "celebration-begin";
pub const CELEBRATION_END: &str = "celebration-end";

fn emit(name: &str, detail: Option<&str>) {
    let Some(window) = web::window() else {
        return;
    };
    let event = match detail {
        Some(d) => {
            let init = web::CustomEventInit::new();
            init.set_detail(&JsValue::from_str(d));
            web::CustomEvent::new_with_event_init_dict(name, &init)
        }
        None => web::CustomEvent::new(name),
    };
    if let Ok(event) = event {
        let _ = window.dispatch_event(&event);
    }
}

fn subscribe(name: &'static str, mut handler: impl FnMut(web::CustomEvent) + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(custom) = ev.dyn_into::<web::CustomEvent>() {
            handler(custom);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn emit_settings_changed(settings: &Settings) {
    emit(SETTINGS_CHANGED, Some(&settings.to_json()));
}

pub fn emit_scheduled_trigger() {
    emit(SCHEDULED_TRIGGER, None);
}

pub fn on_scheduled_trigger(mut handler: impl FnMut() + 'static) {
    subscribe(SCHEDULED_TRIGGER, move |_| handler());
}

pub fn emit_celebration_begin() {
    emit(CELEBRATION_BEGIN, None);
}

pub fn on_celebration_begin(mut handler: impl FnMut() + 'static) {
    subscribe(CELEBRATION_BEGIN, move |_| handler());
}

pub fn emit_celebration_end() {
    emit(CELEBRATION_END, None);
}

pub fn on_celebration_end(mut handler: impl FnMut() + 'static) {
    subscribe(CELEBRATION_END, move |_| handler());
}
