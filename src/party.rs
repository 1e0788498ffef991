//! Celebration controller: spawns butterfly sprites on the begin signal
//! and drives them from a single shared `requestAnimationFrame` callback.
//!
//! The end signal is cooperative, not preemptive: it only marks the
//! party's deadline and in-flight particles finish their own staggered
//! dispersal before the controller returns to idle. A begin while a party
//! is active is ignored.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::bus;
use crate::constants::{PARTY_ANCHOR_SELECTORS, PARTY_GLYPH, PARTY_PALETTE};
use crate::core::party::Party;
use crate::core::SharedParams;
use crate::dom;

struct ActiveParty {
    party: Party,
    sprites: Vec<Option<web::HtmlElement>>,
}

pub struct PartyController {
    shared: Rc<SharedParams>,
    active: RefCell<Option<ActiveParty>>,
    running: Cell<bool>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// Build the controller and subscribe it to the celebration signals. The
/// animation-frame closure is created once and reused across parties.
pub fn install(document: &web::Document, shared: Rc<SharedParams>) -> Rc<PartyController> {
    let controller = Rc::new(PartyController {
        shared,
        active: RefCell::new(None),
        running: Cell::new(false),
        tick: RefCell::new(None),
    });

    let ctrl_tick = controller.clone();
    *controller.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        ctrl_tick.frame(now);
    }) as Box<dyn FnMut(f64)>));

    let ctrl_begin = controller.clone();
    let doc_begin = document.clone();
    bus::on_celebration_begin(move || ctrl_begin.begin(&doc_begin));

    let ctrl_end = controller.clone();
    bus::on_celebration_end(move || ctrl_end.end());

    controller
}

fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

impl PartyController {
    pub fn is_active(&self) -> bool {
        self.active.borrow().is_some()
    }

    fn begin(&self, document: &web::Document) {
        if self.is_active() {
            log::info!("[party] begin ignored, already celebrating");
            return;
        }
        let anchor = dom::first_matching(document, PARTY_ANCHOR_SELECTORS)
            .and_then(|el| dom::element_center(&el))
            .unwrap_or_else(dom::viewport_center);

        let mut rng = SmallRng::from_entropy();
        let party = Party::begin(Vec2::new(anchor.0, anchor.1), now_ms(), &mut rng);
        log::info!("[party] begin, {} butterflies", party.len());

        let sprites = (0..party.len())
            .map(|i| make_sprite(document, i))
            .collect();
        *self.active.borrow_mut() = Some(ActiveParty { party, sprites });

        if !self.running.get() {
            self.running.set(true);
            self.request_frame();
        }
    }

    fn end(&self) {
        if let Some(active) = self.active.borrow_mut().as_mut() {
            active.party.mark_deadline(now_ms());
            log::info!("[party] deadline marked, draining");
        }
    }

    fn frame(&self, now: f64) {
        let finished = {
            let mut slot = self.active.borrow_mut();
            let Some(active) = slot.as_mut() else {
                self.running.set(false);
                return;
            };

            let wind = self.shared.wind();
            let breath = self.shared.breath();
            let frames = active.party.tick(now, wind, breath);
            for frame in &frames {
                if let Some(Some(el)) = active.sprites.get(frame.index) {
                    let transform = format!(
                        "translate3d({:.1}px, {:.1}px, 0)",
                        frame.position.x, frame.position.y
                    );
                    let opacity = format!("{:.3}", frame.opacity);
                    dom::set_styles(
                        el,
                        &[("transform", transform.as_str()), ("opacity", opacity.as_str())],
                    );
                }
            }
            // drop the elements of particles that finished dispersing
            for (i, particle) in active.party.particles().iter().enumerate() {
                if particle.done {
                    if let Some(sprite) = active.sprites.get_mut(i) {
                        if let Some(el) = sprite.take() {
                            el.remove();
                        }
                    }
                }
            }
            active.party.finished(now)
        };

        if finished {
            *self.active.borrow_mut() = None;
            self.running.set(false);
            log::info!("[party] finished, idle");
            return;
        }
        self.request_frame();
    }

    fn request_frame(&self) {
        let Some(window) = web::window() else {
            self.running.set(false);
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            let _ = window.request_animation_frame(tick.as_ref().unchecked_ref());
        }
    }
}

fn make_sprite(document: &web::Document, index: usize) -> Option<web::HtmlElement> {
    let el: web::HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
    el.set_text_content(Some(PARTY_GLYPH));
    let _ = el.set_attribute("aria-hidden", "true");
    let color = PARTY_PALETTE[index % PARTY_PALETTE.len()];
    dom::set_styles(
        &el,
        &[
            ("position", "fixed"),
            ("left", "0"),
            ("top", "0"),
            ("font-size", "22px"),
            ("color", color),
            ("z-index", "9999"),
            ("pointer-events", "none"),
            ("will-change", "transform, opacity"),
        ],
    );
    document.body()?.append_child(&el).ok()?;
    Some(el)
}
