//! The swipe observer: a small press/move/release state machine attached to
//! one observed surface.
//!
//! The observer is `idle` until a press arrives, then `tracking` until a
//! release, a leave, a timeout, or the contact drifting off the surface ends
//! the gesture. Motion listeners exist only while tracking; the press
//! listener exists only while the observer is active.

use crate::classify::classify;
use crate::registration::{self, DirectionSet};
use gesture_events::{
    EventTarget, GestureKind, GestureNotification, InputEvent, InputListener, ListenerOptions,
    Modality, Point, SwipeDirection,
};
use gesture_input::{ModalityListener, PointerDetector};
use std::cell::{Cell, OnceCell};
use std::rc::{Rc, Weak};

/// Minimum displacement on the dominant axis, in pixels.
pub const DEFAULT_THRESHOLD: u32 = 20;
/// Maximum press-to-motion delay, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

const MOUSE_LEAVE: &str = "mouseleave";

/// Native move/end names for the current modality. The press listener uses
/// the canonical down name instead; move and end events keep firing under
/// their per-device names even on unified-pointer hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MotionNames {
    move_: &'static str,
    end: &'static str,
}

impl MotionNames {
    fn for_modality(modality: Modality) -> Self {
        match modality {
            Modality::Mouse => Self {
                move_: "mousemove",
                end: "mouseup",
            },
            Modality::Touch => Self {
                move_: "touchmove",
                end: "touchend",
            },
        }
    }
}

/// Transient per-gesture state, present only between press and release.
#[derive(Clone, Copy, Debug)]
struct MotionState {
    started_ms: u64,
    start_page: Point,
    start_client: Point,
    delta: Point,
}

struct Handlers {
    press: Rc<dyn InputListener>,
    motion: Rc<dyn InputListener>,
    end: Rc<dyn InputListener>,
    modality: Rc<dyn ModalityListener>,
}

pub struct SwipeObserver {
    surface: Rc<dyn EventTarget>,
    detector: Rc<PointerDetector>,
    active: Cell<bool>,
    threshold: Cell<u32>,
    timeout_ms: Cell<u64>,
    terminal: Cell<DirectionSet>,
    continuous: Cell<DirectionSet>,
    motion: Cell<Option<MotionState>>,
    motion_names: Cell<MotionNames>,
    installed_motion: Cell<Option<MotionNames>>,
    handlers: OnceCell<Handlers>,
}

impl SwipeObserver {
    /// Attach an observer to `surface`.
    ///
    /// `events` is an optional space-separated initial registration list;
    /// when given, listening starts immediately as if by [`SwipeObserver::on`].
    /// Non-positive threshold/timeout values are ignored.
    pub fn new(
        surface: Rc<dyn EventTarget>,
        detector: Rc<PointerDetector>,
        events: Option<&str>,
        threshold: Option<u32>,
        timeout_ms: Option<u64>,
    ) -> Rc<Self> {
        let motion_names = MotionNames::for_modality(detector.modality());
        let observer = Rc::new(Self {
            surface,
            detector: detector.clone(),
            active: Cell::new(false),
            threshold: Cell::new(DEFAULT_THRESHOLD),
            timeout_ms: Cell::new(DEFAULT_TIMEOUT_MS),
            terminal: Cell::new(DirectionSet::EMPTY),
            continuous: Cell::new(DirectionSet::EMPTY),
            motion: Cell::new(None),
            motion_names: Cell::new(motion_names),
            installed_motion: Cell::new(None),
            handlers: OnceCell::new(),
        });

        let weak = Rc::downgrade(&observer);
        let modality_watch: Rc<dyn ModalityListener> = Rc::new(ModalityWatch(weak.clone()));
        let _ = observer.handlers.set(Handlers {
            press: Rc::new(PressHandler(weak.clone())),
            motion: Rc::new(MotionHandler(weak.clone())),
            end: Rc::new(EndHandler(weak)),
            modality: modality_watch.clone(),
        });
        detector.subscribe(modality_watch);

        match events {
            Some(list) => observer.on(list, threshold, timeout_ms),
            None => observer.update_tuning(threshold, timeout_ms),
        }
        observer
    }

    /// Register gesture events and start listening for presses.
    ///
    /// Unrecognized names are dropped silently; if none of the names are
    /// recognized, nothing changes. Re-registering an already-registered
    /// name is a no-op beyond the threshold/timeout updates.
    pub fn on(&self, events: &str, threshold: Option<u32>, timeout_ms: Option<u64>) {
        let mut accepted = false;
        for name in events.split_whitespace() {
            match registration::parse(name) {
                Some((GestureKind::Swipe, slot)) => {
                    let mut set = self.terminal.get();
                    set.insert(slot);
                    self.terminal.set(set);
                    accepted = true;
                }
                Some((GestureKind::Swiping, slot)) => {
                    let mut set = self.continuous.get();
                    set.insert(slot);
                    self.continuous.set(set);
                    accepted = true;
                }
                None => log::debug!("ignoring unrecognized gesture event {name:?}"),
            }
        }
        if !accepted {
            return;
        }
        self.update_tuning(threshold, timeout_ms);
        if !self.active.get() {
            self.active.set(true);
            if let Some(handlers) = self.handlers.get() {
                self.surface.add_listener(
                    self.detector.canonical_names().down,
                    handlers.press.clone(),
                    ListenerOptions::default(),
                );
            }
        }
    }

    /// Unregister gesture events.
    ///
    /// Without an argument, clears every registration and tears listening
    /// down completely. With a list, removes only the named registrations and
    /// tears down once both registration sets are empty. Safe to call on an
    /// observer that was never started.
    pub fn off(&self, events: Option<&str>) {
        match events {
            Some(list) => {
                for name in list.split_whitespace() {
                    match registration::parse(name) {
                        Some((GestureKind::Swipe, slot)) => {
                            let mut set = self.terminal.get();
                            set.remove(slot);
                            self.terminal.set(set);
                        }
                        Some((GestureKind::Swiping, slot)) => {
                            let mut set = self.continuous.get();
                            set.remove(slot);
                            self.continuous.set(set);
                        }
                        None => {}
                    }
                }
                if self.terminal.get().is_empty() && self.continuous.get().is_empty() {
                    self.teardown();
                }
            }
            None => {
                self.terminal.set(DirectionSet::EMPTY);
                self.continuous.set(DirectionSet::EMPTY);
                self.teardown();
            }
        }
    }

    pub fn active(&self) -> bool {
        self.active.get()
    }

    pub fn threshold(&self) -> u32 {
        self.threshold.get()
    }

    /// Zero is ignored; the prior threshold stays in effect.
    pub fn set_threshold(&self, value: u32) {
        if value > 0 {
            self.threshold.set(value);
        }
    }

    pub fn timeout(&self) -> u64 {
        self.timeout_ms.get()
    }

    /// Zero is ignored; the prior timeout stays in effect.
    pub fn set_timeout(&self, value: u64) {
        if value > 0 {
            self.timeout_ms.set(value);
        }
    }

    /// The currently registered event names, terminal before continuous.
    pub fn events(&self) -> Vec<&'static str> {
        let mut names = self.terminal.get().names(GestureKind::Swipe);
        names.extend(self.continuous.get().names(GestureKind::Swiping));
        names
    }

    fn update_tuning(&self, threshold: Option<u32>, timeout_ms: Option<u64>) {
        if let Some(value) = threshold {
            if value > 0 {
                self.threshold.set(value);
            }
        }
        if let Some(value) = timeout_ms {
            if value > 0 {
                self.timeout_ms.set(value);
            }
        }
    }

    fn begin_tracking(&self, event: &InputEvent) {
        let Some(contact) = event.sample.primary() else {
            return;
        };
        self.motion.set(Some(MotionState {
            started_ms: event.sample.timestamp_ms,
            start_page: contact.page,
            start_client: contact.client,
            delta: Point::ZERO,
        }));
        let names = self.motion_names.get();
        if let Some(handlers) = self.handlers.get() {
            self.surface
                .add_listener(names.move_, handlers.motion.clone(), ListenerOptions::default());
            self.surface
                .add_listener(names.end, handlers.end.clone(), ListenerOptions::default());
            self.surface
                .add_listener(MOUSE_LEAVE, handlers.end.clone(), ListenerOptions::default());
        }
        self.installed_motion.set(Some(names));
    }

    fn motion_sample(&self, event: &InputEvent) {
        let Some(mut state) = self.motion.get() else {
            return;
        };
        let now = event.sample.timestamp_ms;
        if now.saturating_sub(state.started_ms) > self.timeout_ms.get() {
            // Past the deadline: the gesture just stops, no terminal dispatch.
            self.end_tracking(now);
            return;
        }
        // Samples that cannot suppress the default action are skipped whole.
        if !event.sample.cancelable {
            return;
        }
        event.prevent_default();
        let Some(contact) = event.sample.primary() else {
            return;
        };
        if !self.surface.contains_point(contact.client) {
            // Contact left the surface: treated as a release at the exit point.
            self.end_tracking(now);
            return;
        }
        state.delta = contact.client - state.start_client;
        self.motion.set(Some(state));
        if self.continuous.get().is_empty() {
            return;
        }
        if let Some(direction) = classify(state.delta, self.threshold.get()) {
            self.dispatch(GestureKind::Swiping, direction, state, now);
        }
    }

    fn end_tracking(&self, now: u64) {
        let Some(state) = self.motion.take() else {
            return;
        };
        if now.saturating_sub(state.started_ms) < self.timeout_ms.get()
            && !self.terminal.get().is_empty()
        {
            if let Some(direction) = classify(state.delta, self.threshold.get()) {
                self.dispatch(GestureKind::Swipe, direction, state, now);
            }
        }
        self.remove_motion_listeners();
    }

    fn dispatch(&self, kind: GestureKind, direction: SwipeDirection, state: MotionState, now: u64) {
        let delta_x = state.delta.x as i32;
        let delta_y = state.delta.y as i32;
        let notification = GestureNotification {
            kind,
            direction,
            modality: self.detector.modality(),
            start_page: state.start_page,
            start_client: state.start_client,
            page: state.start_page + Point::new(delta_x as f32, delta_y as f32),
            client: state.start_client + Point::new(delta_x as f32, delta_y as f32),
            delta_x,
            delta_y,
            duration_ms: now.saturating_sub(state.started_ms),
        };
        let set = match kind {
            GestureKind::Swipe => self.terminal.get(),
            GestureKind::Swiping => self.continuous.get(),
        };
        // The direction-agnostic event fires before the specific one.
        if set.contains(None) {
            self.surface.dispatch(kind.base_name(), &notification);
        }
        if set.contains(Some(direction)) {
            self.surface.dispatch(notification.name(), &notification);
        }
    }

    fn modality_changed(&self, modality: Modality) {
        let names = MotionNames::for_modality(modality);
        let previous = self.motion_names.replace(names);
        if previous != names {
            log::debug!("motion events now {}/{}", names.move_, names.end);
        }
        // Swap in-flight motion listeners so an active gesture keeps tracking
        // under the new vocabulary.
        if let Some(installed) = self.installed_motion.get() {
            if installed != names {
                if let Some(handlers) = self.handlers.get() {
                    self.surface.remove_listener(installed.move_, &handlers.motion);
                    self.surface.remove_listener(installed.end, &handlers.end);
                    self.surface.add_listener(
                        names.move_,
                        handlers.motion.clone(),
                        ListenerOptions::default(),
                    );
                    self.surface
                        .add_listener(names.end, handlers.end.clone(), ListenerOptions::default());
                }
                self.installed_motion.set(Some(names));
            }
        }
    }

    fn teardown(&self) {
        self.active.set(false);
        self.motion.set(None);
        if let Some(handlers) = self.handlers.get() {
            self.surface
                .remove_listener(self.detector.canonical_names().down, &handlers.press);
        }
        self.remove_motion_listeners();
    }

    fn remove_motion_listeners(&self) {
        let Some(names) = self.installed_motion.take() else {
            return;
        };
        let Some(handlers) = self.handlers.get() else {
            return;
        };
        self.surface.remove_listener(names.move_, &handlers.motion);
        self.surface.remove_listener(names.end, &handlers.end);
        self.surface.remove_listener(MOUSE_LEAVE, &handlers.end);
    }
}

impl Drop for SwipeObserver {
    fn drop(&mut self) {
        if let Some(handlers) = self.handlers.get() {
            self.detector.unsubscribe(&handlers.modality);
        }
        self.teardown();
    }
}

struct PressHandler(Weak<SwipeObserver>);

impl InputListener for PressHandler {
    fn handle(&self, event: &InputEvent) {
        if let Some(observer) = self.0.upgrade() {
            observer.begin_tracking(event);
        }
    }
}

struct MotionHandler(Weak<SwipeObserver>);

impl InputListener for MotionHandler {
    fn handle(&self, event: &InputEvent) {
        if let Some(observer) = self.0.upgrade() {
            observer.motion_sample(event);
        }
    }
}

struct EndHandler(Weak<SwipeObserver>);

impl InputListener for EndHandler {
    fn handle(&self, event: &InputEvent) {
        if let Some(observer) = self.0.upgrade() {
            observer.end_tracking(event.sample.timestamp_ms);
        }
    }
}

struct ModalityWatch(Weak<SwipeObserver>);

impl ModalityListener for ModalityWatch {
    fn modality_changed(&self, modality: Modality) {
        if let Some(observer) = self.0.upgrade() {
            observer.modality_changed(modality);
        }
    }
}
