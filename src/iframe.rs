//! Background environment iframe: a borderless, non-interactive document
//! layered beneath the page that renders the wind/leaf animation. We only
//! inject it and relay wind updates; its contents are its own business.

use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{IFRAME_ID, IFRAME_SRC};
use crate::core::settings::WIND_DEFAULT;
use crate::dom;

/// Insert the environment iframe beneath all page content. Idempotent by
/// element id; when the body is not available yet the injection is
/// deferred to `DOMContentLoaded`.
pub fn inject(document: &web::Document) {
    if document.get_element_by_id(IFRAME_ID).is_some() {
        return;
    }
    let Some(body) = document.body() else {
        let doc = document.clone();
        let retry = Closure::wrap(Box::new(move || inject(&doc)) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", retry.as_ref().unchecked_ref());
        retry.forget();
        return;
    };

    let Ok(el) = document.create_element("iframe") else {
        return;
    };
    let Ok(iframe) = el.dyn_into::<web::HtmlIFrameElement>() else {
        return;
    };
    iframe.set_id(IFRAME_ID);
    iframe.set_src(IFRAME_SRC);
    // invisible to assistive tech and to the tab order
    let _ = iframe.set_attribute("aria-hidden", "true");
    let _ = iframe.set_attribute("tabindex", "-1");
    dom::set_styles(
        &iframe,
        &[
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100vw"),
            ("height", "100vh"),
            ("border", "none"),
            ("z-index", "-1"),
            ("pointer-events", "none"),
        ],
    );
    let _ = body.insert_before(&iframe, body.first_child().as_ref());
    log::info!("[environment] iframe injected");
}

/// Relay a wind value into the iframe as `{ type: "WIND_UPDATE", wind }`.
/// Non-finite values fall back to the default wind; a missing iframe or
/// content window makes this a no-op.
pub fn notify_wind(document: &web::Document, value: f64) {
    let wind = if value.is_finite() {
        value
    } else {
        WIND_DEFAULT as f64
    };
    let Some(el) = document.get_element_by_id(IFRAME_ID) else {
        return;
    };
    let Ok(iframe) = el.dyn_into::<web::HtmlIFrameElement>() else {
        return;
    };
    let Some(target) = iframe.content_window() else {
        return;
    };
    let message = js_sys::Object::new();
    let _ = Reflect::set(&message, &"type".into(), &"WIND_UPDATE".into());
    let _ = Reflect::set(&message, &"wind".into(), &JsValue::from_f64(wind));
    let _ = target.post_message(&message, "*");
}
