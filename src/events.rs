use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Load,
    Scroll,
    PointerMove,
    PointerLeave,
}

impl EventKind {
    pub fn dom_type(self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Scroll => "scroll",
            Self::PointerMove => "mousemove",
            Self::PointerLeave => "mouseleave",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UiEvent {
    Load,
    Scroll { y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerLeave,
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Load => EventKind::Load,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerLeave => EventKind::PointerLeave,
        }
    }
}

type Handler = Box<dyn FnMut(&UiEvent)>;

#[derive(Default)]
pub struct Bindings {
    handlers: HashMap<EventKind, Vec<Handler>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&UiEvent) + 'static) -> &mut Self {
        self.handlers.entry(kind).or_default().push(Box::new(handler));
        self
    }

    // Handlers run in registration order.
    pub fn dispatch(&mut self, event: &UiEvent) -> usize {
        let Some(handlers) = self.handlers.get_mut(&event.kind()) else {
            return 0;
        };

        for handler in handlers.iter_mut() {
            handler(event);
        }
        handlers.len()
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        let mut kinds: Vec<EventKind> = self.handlers.keys().copied().collect();
        kinds.sort();
        kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn dispatch_reaches_only_matching_handlers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bindings = Bindings::new();

        {
            let log = log.clone();
            bindings.on(EventKind::Scroll, move |event| {
                if let UiEvent::Scroll { y } = event {
                    log.borrow_mut().push(format!("scroll {y}"));
                }
            });
        }
        {
            let log = log.clone();
            bindings.on(EventKind::PointerLeave, move |_| {
                log.borrow_mut().push("leave".to_string())
            });
        }

        assert_eq!(bindings.dispatch(&UiEvent::Scroll { y: 12.0 }), 1);
        assert_eq!(bindings.dispatch(&UiEvent::Load), 0);
        assert_eq!(bindings.dispatch(&UiEvent::PointerLeave), 1);
        assert_eq!(*log.borrow(), vec!["scroll 12".to_string(), "leave".to_string()]);
    }

    #[test]
    fn handlers_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut bindings = Bindings::new();

        for id in 0..3 {
            let order = order.clone();
            bindings.on(EventKind::Load, move |_| order.borrow_mut().push(id));
        }

        assert_eq!(bindings.dispatch(&UiEvent::Load), 3);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn kinds_lists_each_bound_kind_once() {
        let mut bindings = Bindings::new();
        bindings
            .on(EventKind::PointerMove, |_| {})
            .on(EventKind::Scroll, |_| {})
            .on(EventKind::PointerMove, |_| {});

        assert_eq!(bindings.kinds(), vec![EventKind::Scroll, EventKind::PointerMove]);
    }

    #[test]
    fn events_report_their_kind() {
        assert_eq!(UiEvent::PointerMove { x: 1.0, y: 2.0 }.kind(), EventKind::PointerMove);
        assert_eq!(EventKind::PointerMove.dom_type(), "mousemove");
        assert_eq!(EventKind::PointerLeave.dom_type(), "mouseleave");
        assert_eq!(UiEvent::Load.kind().dom_type(), "load");
    }
}
