//! Normalized pointer event data shared by the detector and the observers.

use crate::geometry::Point;
use smallvec::SmallVec;
use std::cell::Cell;

/// Raw device type reported by the host for a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Touch,
    Pen,
}

/// The input modality the engine tracks. Pen input is folded into `Touch`;
/// `Touch` is the generic non-mouse bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modality {
    Mouse,
    Touch,
}

impl Modality {
    pub fn from_pointer_type(pointer_type: PointerType) -> Self {
        match pointer_type {
            PointerType::Mouse => Modality::Mouse,
            PointerType::Touch | PointerType::Pen => Modality::Touch,
        }
    }
}

/// One contact point of a pointer sample, in page and client space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub page: Point,
    pub client: Point,
}

impl Contact {
    pub const fn new(page: Point, client: Point) -> Self {
        Self { page, client }
    }
}

/// A single normalized motion/press/release sample delivered by the host.
///
/// A sample may carry several contacts (multi-touch hardware); the engine
/// only ever reads the primary one.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Host-supplied timestamp in milliseconds.
    pub timestamp_ms: u64,
    pub pointer_type: PointerType,
    pub contacts: SmallVec<[Contact; 1]>,
    /// Whether the host allows the default action to be suppressed.
    pub cancelable: bool,
}

impl PointerSample {
    pub fn new(timestamp_ms: u64, pointer_type: PointerType, contact: Contact) -> Self {
        let mut contacts = SmallVec::new();
        contacts.push(contact);
        Self {
            timestamp_ms,
            pointer_type,
            contacts,
            cancelable: true,
        }
    }

    /// The primary contact, if the sample carries any.
    pub fn primary(&self) -> Option<&Contact> {
        self.contacts.first()
    }
}

/// An input event as handed to an [`InputListener`](crate::InputListener).
///
/// Wraps the sample with the default-action flag the host honors after the
/// handler returns.
#[derive(Debug)]
pub struct InputEvent {
    pub sample: PointerSample,
    default_prevented: Cell<bool>,
}

impl InputEvent {
    pub fn new(sample: PointerSample) -> Self {
        Self {
            sample,
            default_prevented: Cell::new(false),
        }
    }

    /// Suppress the host's default action. No-op when the sample is not
    /// cancelable.
    pub fn prevent_default(&self) {
        if self.sample.cancelable {
            self.default_prevented.set(true);
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
