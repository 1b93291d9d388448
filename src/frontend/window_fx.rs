use super::{document, html_element_by_id, skip_missing};
use crate::config::SiteConfig;
use crate::effects::{parallax_offsets, translate_y, CursorFx, Preloader};
use crate::events::{Bindings, EventKind, UiEvent};
use crate::telemetry::{log_event, LogLevel};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, HtmlElement, MouseEvent};

const PRELOADER_ID: &str = "preloader";
const CURSOR_ID: &str = "cursor";
const CURSOR_TRAIL_ID: &str = "cursor-trail";
const PARALLAX_SELECTOR: &str = "#home [class*=\"animate-blob\"]";

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

fn bind_cursor(bindings: &mut Bindings) {
    let (Some(dot), Some(trail)) = (
        skip_missing(html_element_by_id(CURSOR_ID)),
        skip_missing(html_element_by_id(CURSOR_TRAIL_ID)),
    ) else {
        return;
    };

    let cursor = Rc::new(RefCell::new(CursorFx::default()));

    {
        let cursor = cursor.clone();
        let (dot, trail) = (dot.clone(), trail.clone());
        bindings.on(EventKind::PointerMove, move |event| {
            let UiEvent::PointerMove { x, y } = *event else {
                return;
            };

            let frame = cursor.borrow_mut().on_move(x, y);
            if frame.show {
                set_style(&dot, "opacity", "1");
                set_style(&trail, "opacity", "1");
            }
            set_style(&dot, "transform", &frame.dot);
            set_style(&trail, "transform", &frame.trail);
        });
    }

    bindings.on(EventKind::PointerLeave, move |_| {
        cursor.borrow_mut().on_leave();
        set_style(&dot, "opacity", "0");
        set_style(&trail, "opacity", "0");
    });
}

fn parallax_layers() -> Vec<HtmlElement> {
    let Some(nodes) =
        skip_missing(document()).and_then(|d| d.query_selector_all(PARALLAX_SELECTOR).ok())
    else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn bind_parallax(bindings: &mut Bindings, factor: f64) {
    let layers = parallax_layers();
    if layers.is_empty() {
        return;
    }

    bindings.on(EventKind::Scroll, move |event| {
        let UiEvent::Scroll { y } = *event else {
            return;
        };

        for (layer, offset) in layers.iter().zip(parallax_offsets(y, layers.len(), factor)) {
            set_style(layer, "transform", &translate_y(offset));
        }
    });
}

fn bind_preloader(bindings: &mut Bindings, fade_ms: u32) {
    let Some(overlay) = skip_missing(html_element_by_id(PRELOADER_ID)) else {
        return;
    };

    let preloader = Rc::new(RefCell::new(Preloader::new(fade_ms)));

    bindings.on(EventKind::Load, move |_| {
        let Some(delay) = preloader.borrow_mut().on_load() else {
            return;
        };

        set_style(&overlay, "opacity", preloader.borrow().opacity());

        let preloader = preloader.clone();
        let overlay = overlay.clone();
        Timeout::new(delay, move || {
            preloader.borrow_mut().finish();
            if preloader.borrow().removed() {
                set_style(&overlay, "display", "none");
            }
        })
        .forget();
    });
}

fn to_ui_event(kind: EventKind, event: &Event) -> Option<UiEvent> {
    match kind {
        EventKind::PointerMove => {
            let mouse = event.dyn_ref::<MouseEvent>()?;
            Some(UiEvent::PointerMove {
                x: f64::from(mouse.client_x()),
                y: f64::from(mouse.client_y()),
            })
        }
        EventKind::Scroll => Some(UiEvent::Scroll {
            y: window()?.scroll_y().ok()?,
        }),
        EventKind::PointerLeave => Some(UiEvent::PointerLeave),
        EventKind::Load => Some(UiEvent::Load),
    }
}

fn page_already_loaded() -> bool {
    skip_missing(document())
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false)
}

// Dropping the returned listeners unbinds every effect.
pub fn install(config: &SiteConfig) -> Vec<EventListener> {
    let mut bindings = Bindings::new();
    bind_cursor(&mut bindings);
    bind_parallax(&mut bindings, config.parallax_factor);
    bind_preloader(&mut bindings, config.preloader_fade_ms);

    // The module can finish booting after `load` has fired.
    if page_already_loaded() {
        bindings.dispatch(&UiEvent::Load);
    }

    let Some(win) = window() else {
        return Vec::new();
    };

    let kinds = bindings.kinds();
    log_event(
        LogLevel::Debug,
        "window.bind",
        json!({ "events": kinds.iter().map(|kind| kind.dom_type()).collect::<Vec<_>>() }),
    );

    let bindings = Rc::new(RefCell::new(bindings));
    kinds
        .into_iter()
        .map(|kind| {
            let bindings = bindings.clone();
            EventListener::new(&win, kind.dom_type(), move |event| {
                if let Some(ui_event) = to_ui_event(kind, event) {
                    bindings.borrow_mut().dispatch(&ui_event);
                }
            })
        })
        .collect()
}
