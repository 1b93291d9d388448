use crate::motion::{counter_value, parse_target, ramp_finished, OnceGate};
use gloo_render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

// Dropping it disconnects the observer.
pub struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_once(
    target: &Element,
    threshold: f64,
    on_fire: impl FnOnce() + 'static,
) -> Option<Observation> {
    let mut gate = OnceGate::new(threshold);
    let mut on_fire = Some(on_fire);

    let on_entries = move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };

            if gate.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                observer.unobserve(&entry.target());
                if let Some(fire) = on_fire.take() {
                    fire();
                }
            }
        }
    };
    let callback: ObserverCallback = Closure::new(on_entries);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(target);

    Some(Observation {
        observer,
        _callback: callback,
    })
}

#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let observation = node
                .cast::<Element>()
                .and_then(|element| observe_once(&element, threshold, move || revealed.set(true)));
            move || drop(observation)
        });
    }

    *revealed
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn schedule_ramp(
    slot: FrameSlot,
    value: UseStateHandle<u64>,
    started: Rc<Cell<Option<f64>>>,
    target: u64,
    duration_ms: f64,
) {
    let next_slot = slot.clone();
    let frame = request_animation_frame(move |timestamp| {
        let start = started.get().unwrap_or(timestamp);
        started.set(Some(start));

        let elapsed = timestamp - start;
        value.set(counter_value(elapsed, duration_ms, target));

        if !ramp_finished(elapsed, duration_ms) {
            schedule_ramp(next_slot, value, started, target, duration_ms);
        }
    });

    *slot.borrow_mut() = Some(frame);
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub duration_ms: f64,
    pub threshold: f64,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let value = use_state(|| 0u64);

    {
        let node = node.clone();
        let value = value.clone();
        let target = parse_target(Some(props.target.as_str()));
        let duration_ms = props.duration_ms;
        let threshold = props.threshold;

        use_effect_with((), move |_| {
            let slot: FrameSlot = Rc::default();
            let observation = node.cast::<Element>().and_then(|element| {
                let slot = slot.clone();
                observe_once(&element, threshold, move || {
                    schedule_ramp(slot, value, Rc::default(), target, duration_ms);
                })
            });

            move || {
                drop(observation);
                slot.borrow_mut().take();
            }
        });
    }

    html! {
        <span class="stat-value">
            <span ref={node} class="counter" data-target={props.target.clone()}>{(*value).to_string()}</span>
            {props.suffix.clone()}
        </span>
    }
}
