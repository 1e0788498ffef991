//! Music library loader: one no-cache fetch of the track manifest, then
//! publication of the playlist on `window` plus resolution of a ready
//! promise installed before the fetch starts. Every failure path lands on
//! the fallback library; readiness resolves either way, so callers can
//! await it without caring which path won.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::constants::{LIBRARY_GLOBAL, LIBRARY_READY_GLOBAL, MANIFEST_PATH};
use crate::core::library::{fallback_library, parse_manifest, TrackEntry};

/// Install `window.windSongLibraryReady` and hand back its resolver.
pub fn install_ready_promise(window: &web::Window) -> Option<js_sys::Function> {
    let resolver: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
    let resolver_capture = resolver.clone();
    let promise = js_sys::Promise::new(&mut move |resolve, _reject| {
        *resolver_capture.borrow_mut() = Some(resolve);
    });
    let _ = Reflect::set(window, &LIBRARY_READY_GLOBAL.into(), &promise);
    resolver.borrow_mut().take()
}

/// Fetch, filter, publish, resolve. Never raises to the caller.
pub async fn load(window: web::Window, resolve_ready: Option<js_sys::Function>) {
    let tracks = match fetch_manifest(&window).await {
        Ok(tracks) => {
            log::info!("[library] {} tracks ready", tracks.len());
            tracks
        }
        Err(e) => {
            log::warn!("[library] manifest unavailable ({}), using fallback", e);
            fallback_library()
        }
    };
    publish(&window, &tracks);
    if let Some(resolve) = resolve_ready {
        let _ = resolve.call0(&JsValue::NULL);
    }
}

async fn fetch_manifest(window: &web::Window) -> anyhow::Result<Vec<TrackEntry>> {
    let init = web::RequestInit::new();
    init.set_cache(web::RequestCache::NoStore);
    let fetched = JsFuture::from(window.fetch_with_str_and_init(MANIFEST_PATH, &init))
        .await
        .map_err(|e| anyhow!("fetch failed: {:?}", e))?;
    let response: web::Response = fetched
        .dyn_into()
        .map_err(|e| anyhow!("not a response: {:?}", e))?;
    if !response.ok() {
        return Err(anyhow!("status {}", response.status()));
    }
    let text = JsFuture::from(response.text().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("body read failed: {:?}", e))?;
    let text = text.as_string().ok_or_else(|| anyhow!("non-string body"))?;
    parse_manifest(&text).ok_or_else(|| anyhow!("no playable tracks in manifest"))
}

fn publish(window: &web::Window, tracks: &[TrackEntry]) {
    let list = js_sys::Array::new();
    for track in tracks {
        let entry = js_sys::Object::new();
        let _ = Reflect::set(&entry, &"name".into(), &JsValue::from_str(&track.name));
        let _ = Reflect::set(&entry, &"url".into(), &JsValue::from_str(&track.url));
        list.push(&entry);
    }
    let _ = Reflect::set(window, &LIBRARY_GLOBAL.into(), &list);
}
