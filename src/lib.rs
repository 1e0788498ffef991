#![cfg(target_arch = "wasm32")]
//! Wind Song: ambient front-end layered over a host page. Boot order is
//! load-time: inject the environment iframe and kick off the music
//! library fetch independently, then seed shared state from the settings
//! store, install the panel and celebration controller, and arm the Rez
//! scheduler.

use std::rc::Rc;

use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bus;
mod constants;
mod core;
mod dom;
mod iframe;
mod library;
mod panel;
mod party;
mod scheduler;
mod storage;

use crate::core::SharedParams;
use crate::scheduler::RezScheduler;

/// Host-page entry point for starting a celebration. Equivalent to
/// dispatching the begin event on `window`.
#[wasm_bindgen(js_name = beginCelebration)]
pub fn begin_celebration() {
    bus::emit_celebration_begin();
}

/// Host-page entry point for ending a celebration. In-flight butterflies
/// still finish their own dispersal.
#[wasm_bindgen(js_name = endCelebration)]
pub fn end_celebration() {
    bus::emit_celebration_end();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("windsong starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    iframe::inject(&document);

    let resolve_ready = library::install_ready_promise(&window);
    spawn_local(library::load(window.clone(), resolve_ready));

    let store = storage::SettingsStore::new(&window);
    let settings = store.load();
    let shared = Rc::new(SharedParams::default());
    shared.ensure_initialized(&settings);

    let rez_scheduler = RezScheduler::new();
    let _panel = panel::install(&document, store, shared.clone(), rez_scheduler.clone());
    let _party = party::install(&document, shared.clone());

    // the celebration holds the hourly trigger while it runs
    let sched_begin = rez_scheduler.clone();
    bus::on_celebration_begin(move || sched_begin.suspend());
    let sched_end = rez_scheduler.clone();
    bus::on_celebration_end(move || sched_end.resume());
    bus::on_scheduled_trigger(|| log::info!("[rez] trigger"));

    iframe::notify_wind(&document, shared.wind() as f64);
    scheduler::schedule(&rez_scheduler, shared.rez());

    log::info!("windsong ready");
    Ok(())
}
