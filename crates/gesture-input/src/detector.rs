//! Process-wide input modality tracking.
//!
//! One detector is constructed by the composition root before any gesture
//! observer and shared from there; it is an injectable instance rather than a
//! global. Under the unified pointer interface it watches the window for
//! device switches and notifies subscribers; under the touch and mouse
//! interfaces the modality is fixed at construction.

use crate::interface::{CanonicalNames, EventInterface};
use gesture_events::{
    identity_eq, EventTarget, HostCapabilities, InputEvent, InputListener, ListenerOptions,
    Modality,
};
use std::cell::{Cell, OnceCell, RefCell};
use std::rc::{Rc, Weak};

/// Subscriber to modality changes. Notified synchronously, in subscription
/// order.
pub trait ModalityListener {
    fn modality_changed(&self, modality: Modality);
}

pub struct PointerDetector {
    interface: EventInterface,
    names: CanonicalNames,
    window: Rc<dyn EventTarget>,
    modality: Cell<Modality>,
    subscribers: RefCell<Vec<Rc<dyn ModalityListener>>>,
    device_watch: OnceCell<Rc<dyn InputListener>>,
}

impl PointerDetector {
    /// Probe the host and start watching for device switches.
    ///
    /// `window` is the host's global input source; listeners installed on it
    /// live for as long as the detector does.
    pub fn new(caps: &dyn HostCapabilities, window: Rc<dyn EventTarget>) -> Rc<Self> {
        let interface = EventInterface::probe(caps);
        let names = CanonicalNames::for_interface(interface);
        // Assume touch-first when ambiguous, even under the pointer interface.
        let modality = if interface == EventInterface::Mouse {
            Modality::Mouse
        } else {
            Modality::Touch
        };
        log::debug!("event interface {interface:?}, initial modality {modality:?}");

        let detector = Rc::new(Self {
            interface,
            names,
            window,
            modality: Cell::new(modality),
            subscribers: RefCell::new(Vec::new()),
            device_watch: OnceCell::new(),
        });

        if interface == EventInterface::Pointer {
            let watch: Rc<dyn InputListener> = Rc::new(DeviceWatch {
                detector: Rc::downgrade(&detector),
            });
            // The initial modality is touch, so the move listener is armed to
            // catch a switch to mouse, which surfaces as a move before any
            // press. The press listener catches switches to pen/touch.
            detector
                .window
                .add_listener(names.move_, watch.clone(), ListenerOptions::default());
            detector
                .window
                .add_listener(names.down, watch.clone(), ListenerOptions::default());
            let _ = detector.device_watch.set(watch);
        }
        detector
    }

    /// The modality currently in use.
    pub fn modality(&self) -> Modality {
        self.modality.get()
    }

    pub fn event_interface(&self) -> EventInterface {
        self.interface
    }

    /// The immutable canonical-name mapping derived at construction.
    pub fn canonical_names(&self) -> &CanonicalNames {
        &self.names
    }

    /// Register a change subscriber. Idempotent by handle identity.
    pub fn subscribe(&self, listener: Rc<dyn ModalityListener>) {
        let mut subscribers = self.subscribers.borrow_mut();
        if subscribers.iter().any(|s| identity_eq(s, &listener)) {
            return;
        }
        subscribers.push(listener);
    }

    /// Remove a subscriber; no-op if it was never registered.
    pub fn unsubscribe(&self, listener: &Rc<dyn ModalityListener>) {
        self.subscribers
            .borrow_mut()
            .retain(|s| !identity_eq(s, listener));
    }

    fn device_event(&self, event: &InputEvent) {
        let reported = Modality::from_pointer_type(event.sample.pointer_type);
        if reported == self.modality.get() {
            return;
        }
        if let Some(watch) = self.device_watch.get() {
            if reported == Modality::Mouse {
                // A switch away from mouse surfaces as a press first, so the
                // move listener is no longer needed.
                self.window.remove_listener(self.names.move_, watch);
            } else {
                // A return to mouse surfaces as a move before any press, so
                // re-arm the move listener.
                self.window
                    .add_listener(self.names.move_, watch.clone(), ListenerOptions::default());
            }
        }
        self.modality.set(reported);
        log::debug!("modality switched to {reported:?}");

        // Snapshot so a subscriber may (un)subscribe during notification.
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in &subscribers {
            subscriber.modality_changed(reported);
        }
    }
}

struct DeviceWatch {
    detector: Weak<PointerDetector>,
}

impl InputListener for DeviceWatch {
    fn handle(&self, event: &InputEvent) {
        if let Some(detector) = self.detector.upgrade() {
            detector.device_event(event);
        }
    }
}
