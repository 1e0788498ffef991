use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// First element matching any of `selectors`, in order. Bad selectors are
/// skipped rather than surfaced.
pub fn first_matching(document: &web::Document, selectors: &[&str]) -> Option<web::Element> {
    for sel in selectors {
        if let Ok(Some(el)) = document.query_selector(sel) {
            return Some(el);
        }
    }
    None
}

/// Center of an element's bounding box in viewport coordinates, or `None`
/// when the box has zero size (hidden/unlaid-out elements are useless as
/// anchors).
pub fn element_center(el: &web::Element) -> Option<(f32, f32)> {
    let rect = el.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    Some((
        (rect.x() + rect.width() / 2.0) as f32,
        (rect.y() + rect.height() / 2.0) as f32,
    ))
}

/// Viewport center, used whenever no page anchor qualifies.
pub fn viewport_center() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    ((width / 2.0) as f32, (height / 2.0) as f32)
}

pub fn set_styles(el: &web::HtmlElement, pairs: &[(&str, &str)]) {
    let style = el.style();
    for (prop, val) in pairs {
        let _ = style.set_property(prop, val);
    }
}
