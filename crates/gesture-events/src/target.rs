//! The seam between the gesture engine and the host's event delivery system.
//!
//! Hosts expose elements (and the global input source) as [`EventTarget`]s.
//! Listener identity is `Rc` pointer identity, so removing a listener requires
//! the same handle that installed it.

use crate::events::InputEvent;
use crate::geometry::Point;
use crate::notification::GestureNotification;
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Option form for installing input listeners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Handler promises not to suppress the default action.
    pub passive: bool,
    /// Remove the listener after its first invocation.
    pub once: bool,
}

impl ListenerOptions {
    pub const ONCE: ListenerOptions = ListenerOptions {
        passive: false,
        once: true,
    };
}

/// Handler for native input events.
pub trait InputListener {
    fn handle(&self, event: &InputEvent);
}

/// Listener identity: same allocation, compared through thin pointers so the
/// vtable part of a `dyn` handle never affects the result.
pub fn identity_eq<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
}

/// Consumer-side handler for gesture notifications dispatched on a surface.
pub trait NotificationListener {
    fn handle(&self, notification: &GestureNotification);
}

/// A host element (or the global input source) the engine can attach to.
pub trait EventTarget {
    /// Install `listener` for the named native event. Installing the same
    /// listener handle twice for one name is a no-op.
    fn add_listener(&self, event: &str, listener: Rc<dyn InputListener>, options: ListenerOptions);

    /// Remove the listener registered under `event` with this identity, if any.
    fn remove_listener(&self, event: &str, listener: &Rc<dyn InputListener>);

    /// Dispatch an application-defined notification under `name` to the
    /// target's notification listeners.
    fn dispatch(&self, name: &str, notification: &GestureNotification);

    /// Whether the element under the given client-space coordinate is still
    /// contained within this target.
    fn contains_point(&self, client: Point) -> bool;

    /// Whether [`ListenerOptions`] are honored by `add_listener`. Hosts that
    /// predate the option form report `false`; see [`add_listener_once`] for
    /// the fallback.
    fn supports_listener_options(&self) -> bool;
}

/// Capability flags the host exposes for its input-event vocabularies.
pub trait HostCapabilities {
    fn has_pointer_events(&self) -> bool;
    fn has_touch_events(&self) -> bool;
}

/// Install a listener that fires at most once.
///
/// Uses the `once` listener option when the target supports the option form,
/// and falls back to a manual one-shot wrapper that removes itself after the
/// first delivery otherwise.
pub fn add_listener_once(
    target: &Rc<dyn EventTarget>,
    event: &'static str,
    listener: Rc<dyn InputListener>,
) {
    if target.supports_listener_options() {
        target.add_listener(event, listener, ListenerOptions::ONCE);
        return;
    }
    log::debug!("host lacks listener options, installing one-shot wrapper for {event}");
    let wrapper = Rc::new_cyclic(|this: &Weak<OnceListener>| OnceListener {
        target: Rc::downgrade(target),
        event,
        inner: listener,
        this: this.clone(),
        fired: Cell::new(false),
    });
    target.add_listener(event, wrapper, ListenerOptions::default());
}

struct OnceListener {
    target: Weak<dyn EventTarget>,
    event: &'static str,
    inner: Rc<dyn InputListener>,
    this: Weak<OnceListener>,
    fired: Cell<bool>,
}

impl InputListener for OnceListener {
    fn handle(&self, event: &InputEvent) {
        // Guard against re-entrant delivery before removal completes.
        if self.fired.replace(true) {
            return;
        }
        self.inner.handle(event);
        if let (Some(target), Some(this)) = (self.target.upgrade(), self.this.upgrade()) {
            let this: Rc<dyn InputListener> = this;
            target.remove_listener(self.event, &this);
        }
    }
}
