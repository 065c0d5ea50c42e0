//! Shared vocabulary for the gesture engine: geometry, normalized pointer
//! samples, gesture notification payloads, and the host event-target seam.

pub mod events;
pub mod geometry;
pub mod notification;
pub mod target;

pub use events::{Contact, InputEvent, Modality, PointerSample, PointerType};
pub use geometry::{Point, Rect};
pub use notification::{GestureKind, GestureNotification, SwipeDirection};
pub use target::{
    add_listener_once, identity_eq, EventTarget, HostCapabilities, InputListener, ListenerOptions,
    NotificationListener,
};
