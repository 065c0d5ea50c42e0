//! Capability probing and the canonical event-name mapping.
//!
//! The host exposes at most one of three input-event vocabularies; probing
//! picks the richest one available and the result is fixed for the process
//! lifetime.

use gesture_events::HostCapabilities;

/// Which native event vocabulary the host exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventInterface {
    /// Unified pointer events covering mouse, touch, and pen.
    Pointer,
    Touch,
    Mouse,
}

impl EventInterface {
    /// Pure function from capability flags to the interface: pointer events
    /// win over touch events; absence of both degrades to mouse.
    pub fn probe(caps: &dyn HostCapabilities) -> Self {
        if caps.has_pointer_events() {
            EventInterface::Pointer
        } else if caps.has_touch_events() {
            EventInterface::Touch
        } else {
            EventInterface::Mouse
        }
    }
}

/// Native event names for the five canonical actions, fixed per interface.
///
/// The touch vocabulary has no hover concept, so `enter`/`leave` are `None`
/// there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanonicalNames {
    pub enter: Option<&'static str>,
    pub leave: Option<&'static str>,
    pub up: &'static str,
    pub down: &'static str,
    pub move_: &'static str,
}

impl CanonicalNames {
    pub fn for_interface(interface: EventInterface) -> Self {
        match interface {
            EventInterface::Pointer => Self {
                enter: Some("pointerenter"),
                leave: Some("pointerleave"),
                up: "pointerup",
                down: "pointerdown",
                move_: "pointermove",
            },
            EventInterface::Touch => Self {
                enter: None,
                leave: None,
                up: "touchend",
                down: "touchstart",
                move_: "touchmove",
            },
            EventInterface::Mouse => Self {
                enter: Some("mouseenter"),
                leave: Some("mouseleave"),
                up: "mouseup",
                down: "mousedown",
                move_: "mousemove",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesture_testing::StaticCapabilities;

    #[test]
    fn probe_prefers_pointer_events() {
        let caps = StaticCapabilities {
            pointer_events: true,
            touch_events: true,
        };
        assert_eq!(EventInterface::probe(&caps), EventInterface::Pointer);
    }

    #[test]
    fn probe_falls_back_to_touch_then_mouse() {
        let touch_only = StaticCapabilities {
            pointer_events: false,
            touch_events: true,
        };
        assert_eq!(EventInterface::probe(&touch_only), EventInterface::Touch);

        let neither = StaticCapabilities::default();
        assert_eq!(EventInterface::probe(&neither), EventInterface::Mouse);
    }

    #[test]
    fn pointer_interface_names() {
        let names = CanonicalNames::for_interface(EventInterface::Pointer);
        assert_eq!(names.enter, Some("pointerenter"));
        assert_eq!(names.leave, Some("pointerleave"));
        assert_eq!(names.up, "pointerup");
        assert_eq!(names.down, "pointerdown");
        assert_eq!(names.move_, "pointermove");
    }

    #[test]
    fn touch_interface_has_no_hover_names() {
        let names = CanonicalNames::for_interface(EventInterface::Touch);
        assert_eq!(names.enter, None);
        assert_eq!(names.leave, None);
        assert_eq!(names.up, "touchend");
        assert_eq!(names.down, "touchstart");
        assert_eq!(names.move_, "touchmove");
    }

    #[test]
    fn mouse_interface_names() {
        let names = CanonicalNames::for_interface(EventInterface::Mouse);
        assert_eq!(names.enter, Some("mouseenter"));
        assert_eq!(names.leave, Some("mouseleave"));
        assert_eq!(names.up, "mouseup");
        assert_eq!(names.down, "mousedown");
        assert_eq!(names.move_, "mousemove");
    }
}
