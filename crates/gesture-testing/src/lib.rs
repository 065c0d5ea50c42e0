//! In-memory host doubles: a recording [`EventTarget`], static capability
//! flags, and pointer-sample builders.
//!
//! Used as a dev-dependency by the engine crates and as the simulated host
//! in the demo app.

use gesture_events::{
    Contact, EventTarget, GestureNotification, InputEvent, InputListener, ListenerOptions,
    NotificationListener, Point, PointerSample, PointerType, Rect,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Fixed capability flags for driving the interface probe in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticCapabilities {
    pub pointer_events: bool,
    pub touch_events: bool,
}

impl gesture_events::HostCapabilities for StaticCapabilities {
    fn has_pointer_events(&self) -> bool {
        self.pointer_events
    }

    fn has_touch_events(&self) -> bool {
        self.touch_events
    }
}

struct ListenerEntry {
    event: String,
    listener: Rc<dyn InputListener>,
    once: bool,
}

/// A scriptable [`EventTarget`]: keeps a listener registry with DOM-like
/// identity semantics, records every dispatched notification, and lets tests
/// drive handlers through [`ScriptedTarget::deliver`].
#[derive(Default)]
pub struct ScriptedTarget {
    listeners: RefCell<Vec<ListenerEntry>>,
    notification_listeners: RefCell<Vec<(String, Rc<dyn NotificationListener>)>>,
    notifications: RefCell<Vec<(String, GestureNotification)>>,
    bounds: Cell<Option<Rect>>,
    legacy_add_listener: Cell<bool>,
}

impl ScriptedTarget {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// A target whose `contains_point` only accepts coordinates inside
    /// `bounds`.
    pub fn with_bounds(bounds: Rect) -> Rc<Self> {
        let target = Self::default();
        target.bounds.set(Some(bounds));
        Rc::new(target)
    }

    /// Simulate a host that predates the add-listener option form.
    pub fn ignore_listener_options(&self) {
        self.legacy_add_listener.set(true);
    }

    pub fn set_bounds(&self, bounds: Option<Rect>) {
        self.bounds.set(bounds);
    }

    /// Deliver a native event to every listener registered under `event`,
    /// returning the event so tests can inspect `default_prevented`.
    pub fn deliver(&self, event: &str, sample: PointerSample) -> InputEvent {
        let input = InputEvent::new(sample);
        let matching: Vec<Rc<dyn InputListener>> = self
            .listeners
            .borrow()
            .iter()
            .filter(|entry| entry.event == event)
            .map(|entry| entry.listener.clone())
            .collect();
        for listener in &matching {
            listener.handle(&input);
        }
        self.listeners
            .borrow_mut()
            .retain(|entry| !(entry.event == event && entry.once));
        input
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|entry| entry.event == event)
            .count()
    }

    /// Names of all currently installed input listeners, in install order.
    pub fn installed_events(&self) -> Vec<String> {
        self.listeners
            .borrow()
            .iter()
            .map(|entry| entry.event.clone())
            .collect()
    }

    pub fn add_notification_listener(&self, name: &str, listener: Rc<dyn NotificationListener>) {
        self.notification_listeners
            .borrow_mut()
            .push((name.to_string(), listener));
    }

    /// Every notification dispatched so far, as (event name, payload) pairs.
    pub fn notifications(&self) -> Vec<(String, GestureNotification)> {
        self.notifications.borrow().clone()
    }

    pub fn notification_names(&self) -> Vec<String> {
        self.notifications
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn clear_notifications(&self) {
        self.notifications.borrow_mut().clear();
    }
}

impl EventTarget for ScriptedTarget {
    fn add_listener(&self, event: &str, listener: Rc<dyn InputListener>, options: ListenerOptions) {
        let mut listeners = self.listeners.borrow_mut();
        let already_installed = listeners
            .iter()
            .any(|entry| entry.event == event && gesture_events::identity_eq(&entry.listener, &listener));
        if already_installed {
            return;
        }
        listeners.push(ListenerEntry {
            event: event.to_string(),
            listener,
            once: options.once && !self.legacy_add_listener.get(),
        });
    }

    fn remove_listener(&self, event: &str, listener: &Rc<dyn InputListener>) {
        self.listeners
            .borrow_mut()
            .retain(|entry| !(entry.event == event && gesture_events::identity_eq(&entry.listener, listener)));
    }

    fn dispatch(&self, name: &str, notification: &GestureNotification) {
        log::trace!("dispatch {name}: {notification:?}");
        self.notifications
            .borrow_mut()
            .push((name.to_string(), *notification));
        let matching: Vec<Rc<dyn NotificationListener>> = self
            .notification_listeners
            .borrow()
            .iter()
            .filter(|(registered, _)| registered == name)
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in &matching {
            listener.handle(notification);
        }
    }

    fn contains_point(&self, client: Point) -> bool {
        match self.bounds.get() {
            Some(bounds) => bounds.contains(client),
            None => true,
        }
    }

    fn supports_listener_options(&self) -> bool {
        !self.legacy_add_listener.get()
    }
}

/// Listener that counts how many events it receives.
#[derive(Default)]
pub struct CountingListener {
    hits: Cell<usize>,
}

impl CountingListener {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn hits(&self) -> usize {
        self.hits.get()
    }
}

impl InputListener for CountingListener {
    fn handle(&self, _event: &InputEvent) {
        self.hits.set(self.hits.get() + 1);
    }
}

/// A pointer sample at the given client coordinate, with the page coordinate
/// matching it (an unscrolled viewport).
pub fn sample_at(timestamp_ms: u64, pointer_type: PointerType, x: f32, y: f32) -> PointerSample {
    let point = Point::new(x, y);
    PointerSample::new(timestamp_ms, pointer_type, Contact::new(point, point))
}

/// Same as [`sample_at`] but with distinct page-space coordinates, as under a
/// scrolled viewport.
pub fn sample_with_page(
    timestamp_ms: u64,
    pointer_type: PointerType,
    client: Point,
    page: Point,
) -> PointerSample {
    PointerSample::new(timestamp_ms, pointer_type, Contact::new(page, client))
}

/// A sample whose default action cannot be suppressed (e.g. a scroll already
/// in flight).
pub fn non_cancelable_at(
    timestamp_ms: u64,
    pointer_type: PointerType,
    x: f32,
    y: f32,
) -> PointerSample {
    let mut sample = sample_at(timestamp_ms, pointer_type, x, y);
    sample.cancelable = false;
    sample
}
