//! Floating "Wind Song" settings panel.
//!
//! Built hidden at boot together with its launcher button; `open` syncs
//! the inputs from shared state, `apply` runs the ordered update flow:
//! clamp, persist, update shared state, emit settings-changed, relay wind
//! to the environment iframe, re-arm the Rez scheduler, close.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::bus;
use crate::constants::{
    ABOUT_SELECTORS, INPUT_BREATH_ID, INPUT_ELEGRA_ID, INPUT_REZ_ID, INPUT_WIND_ID,
    PANEL_ID, PANEL_LAUNCHER_ID,
};
use crate::core::settings::{
    BREATH_MAX, BREATH_MIN, ELEGRA_MAX, ELEGRA_MIN, REZ_MAX, REZ_MIN, WIND_MAX, WIND_MIN,
};
use crate::core::{Settings, SharedParams};
use crate::dom;
use crate::iframe;
use crate::scheduler::{self, RezScheduler};
use crate::storage::SettingsStore;

pub struct SettingsPanel {
    document: web::Document,
    store: SettingsStore,
    shared: Rc<SharedParams>,
    scheduler: Rc<RezScheduler>,
}

/// Build the panel and launcher and wire their clicks.
pub fn install(
    document: &web::Document,
    store: SettingsStore,
    shared: Rc<SharedParams>,
    scheduler: Rc<RezScheduler>,
) -> Rc<SettingsPanel> {
    let panel = Rc::new(SettingsPanel {
        document: document.clone(),
        store,
        shared,
        scheduler,
    });
    build_panel(&panel);
    build_launcher(&panel);
    panel
}

impl SettingsPanel {
    pub fn open(&self) {
        self.sync_input(INPUT_WIND_ID, self.shared.wind());
        self.sync_input(INPUT_BREATH_ID, self.shared.breath());
        self.sync_input(INPUT_ELEGRA_ID, self.shared.elegra());
        self.sync_input(INPUT_REZ_ID, self.shared.rez());
        self.set_visible(true);
    }

    pub fn close(&self) {
        self.set_visible(false);
    }

    pub fn is_open(&self) -> bool {
        self.panel_element()
            .map(|el| el.style().get_property_value("display").ok() == Some("block".into()))
            .unwrap_or(false)
    }

    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Ordered apply flow. Inputs are clamped with the same rules the
    /// store uses, so nothing out of range ever escapes this method.
    pub fn apply(&self) {
        let settings = Settings::clamped(
            self.read_input(INPUT_WIND_ID),
            self.read_input(INPUT_BREATH_ID),
            self.read_input(INPUT_ELEGRA_ID),
            self.read_input(INPUT_REZ_ID),
        );
        self.store.save(&settings);
        self.shared.apply(&settings);
        bus::emit_settings_changed(&settings);
        iframe::notify_wind(&self.document, settings.wind as f64);
        scheduler::schedule(&self.scheduler, settings.rez);
        log::info!(
            "[panel] applied wind={} breath={} elegra={} rez={}",
            settings.wind,
            settings.breath,
            settings.elegra,
            settings.rez
        );
        self.close();
    }

    fn panel_element(&self) -> Option<web::HtmlElement> {
        self.document
            .get_element_by_id(PANEL_ID)
            .and_then(|el| el.dyn_into().ok())
    }

    fn set_visible(&self, visible: bool) {
        if let Some(el) = self.panel_element() {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    fn input(&self, id: &str) -> Option<web::HtmlInputElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into().ok())
    }

    /// NaN when the input is missing or holds nothing numeric; the
    /// clamping constructor turns that into the field default.
    fn read_input(&self, id: &str) -> f64 {
        self.input(id).map(|i| i.value_as_number()).unwrap_or(f64::NAN)
    }

    fn sync_input(&self, id: &str, value: i32) {
        if let Some(input) = self.input(id) {
            input.set_value_as_number(value as f64);
        }
    }
}

fn number_row(
    document: &web::Document,
    label: &str,
    id: &str,
    min: i32,
    max: i32,
) -> Option<web::HtmlElement> {
    let row: web::HtmlElement = document.create_element("label").ok()?.dyn_into().ok()?;
    dom::set_styles(
        &row,
        &[
            ("display", "flex"),
            ("justify-content", "space-between"),
            ("gap", "12px"),
            ("margin", "4px 0"),
        ],
    );
    row.set_text_content(Some(label));

    let input: web::HtmlInputElement = document.create_element("input").ok()?.dyn_into().ok()?;
    input.set_type("number");
    input.set_id(id);
    input.set_min(&min.to_string());
    input.set_max(&max.to_string());
    dom::set_styles(&input, &[("width", "64px")]);
    row.append_child(&input).ok()?;
    Some(row)
}

fn build_panel(panel: &Rc<SettingsPanel>) {
    let document = &panel.document;
    if document.get_element_by_id(PANEL_ID).is_some() {
        return;
    }
    let Some(body) = document.body() else {
        return;
    };
    let Some(container) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    container.set_id(PANEL_ID);
    dom::set_styles(
        &container,
        &[
            ("position", "fixed"),
            ("top", "56px"),
            ("right", "16px"),
            ("z-index", "10000"),
            ("display", "none"),
            ("padding", "12px 16px"),
            ("border-radius", "8px"),
            ("background", "rgba(20, 26, 34, 0.92)"),
            ("color", "#dde7f0"),
            ("font", "13px system-ui"),
        ],
    );

    let rows = [
        ("Wind", INPUT_WIND_ID, WIND_MIN, WIND_MAX),
        ("Breath", INPUT_BREATH_ID, BREATH_MIN, BREATH_MAX),
        ("Elegra", INPUT_ELEGRA_ID, ELEGRA_MIN, ELEGRA_MAX),
        ("Rez", INPUT_REZ_ID, REZ_MIN, REZ_MAX),
    ];
    for (label, id, min, max) in rows {
        if let Some(row) = number_row(document, label, id, min, max) {
            let _ = container.append_child(&row);
        }
    }

    if let Ok(buttons) = document.create_element("div") {
        if let Ok(apply_btn) = document.create_element("button") {
            apply_btn.set_text_content(Some("Apply"));
            let panel_apply = panel.clone();
            dom::add_click_listener(&apply_btn, move || panel_apply.apply());
            let _ = buttons.append_child(&apply_btn);
        }
        if let Ok(close_btn) = document.create_element("button") {
            close_btn.set_text_content(Some("Close"));
            let panel_close = panel.clone();
            dom::add_click_listener(&close_btn, move || panel_close.close());
            let _ = buttons.append_child(&close_btn);
        }
        let _ = container.append_child(&buttons);
    }

    let _ = body.append_child(&container);
}

fn build_launcher(panel: &Rc<SettingsPanel>) {
    let document = &panel.document;
    if document.get_element_by_id(PANEL_LAUNCHER_ID).is_some() {
        return;
    }
    let Some(body) = document.body() else {
        return;
    };
    let Some(launcher) = document
        .create_element("button")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    launcher.set_id(PANEL_LAUNCHER_ID);
    launcher.set_text_content(Some("Wind Song"));
    let _ = launcher.set_attribute("aria-label", "Wind Song settings");
    dom::set_styles(
        &launcher,
        &[
            ("position", "fixed"),
            ("z-index", "10000"),
            ("font", "12px system-ui"),
            ("padding", "4px 10px"),
            ("border-radius", "12px"),
        ],
    );
    // sit next to the page's About control when there is one
    match dom::first_matching(document, ABOUT_SELECTORS).and_then(|el| dom::element_center(&el)) {
        Some((_, y)) => {
            let top = format!("{:.0}px", (y - 12.0).max(8.0));
            dom::set_styles(&launcher, &[("top", top.as_str()), ("right", "16px")]);
        }
        None => dom::set_styles(&launcher, &[("bottom", "16px"), ("right", "16px")]),
    }

    let panel_toggle = panel.clone();
    dom::add_click_listener(&launcher, move || panel_toggle.toggle());
    let _ = body.append_child(&launcher);
}
