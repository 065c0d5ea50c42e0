//! Gesture notifications dispatched on an observed surface.

use crate::events::Modality;
use crate::geometry::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Terminal (`Swipe`) vs in-progress (`Swiping`) notification class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Swipe,
    Swiping,
}

impl GestureKind {
    /// The direction-agnostic event name for this kind.
    pub fn base_name(&self) -> &'static str {
        match self {
            GestureKind::Swipe => "swipe",
            GestureKind::Swiping => "swiping",
        }
    }
}

/// Payload carried by every swipe/swiping notification.
///
/// Deltas are truncated toward zero to whole pixels; the current page/client
/// coordinates are the start coordinates shifted by the truncated deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureNotification {
    pub kind: GestureKind,
    pub direction: SwipeDirection,
    /// Modality active at dispatch time.
    pub modality: Modality,
    pub start_page: Point,
    pub start_client: Point,
    pub page: Point,
    pub client: Point,
    pub delta_x: i32,
    pub delta_y: i32,
    /// Milliseconds elapsed since the press that started the gesture.
    pub duration_ms: u64,
}

impl GestureNotification {
    /// The direction-specific event name, e.g. `"swiping-left"`.
    pub fn name(&self) -> &'static str {
        match (self.kind, self.direction) {
            (GestureKind::Swipe, SwipeDirection::Left) => "swipe-left",
            (GestureKind::Swipe, SwipeDirection::Right) => "swipe-right",
            (GestureKind::Swipe, SwipeDirection::Up) => "swipe-up",
            (GestureKind::Swipe, SwipeDirection::Down) => "swipe-down",
            (GestureKind::Swiping, SwipeDirection::Left) => "swiping-left",
            (GestureKind::Swiping, SwipeDirection::Right) => "swiping-right",
            (GestureKind::Swiping, SwipeDirection::Up) => "swiping-up",
            (GestureKind::Swiping, SwipeDirection::Down) => "swiping-down",
        }
    }
}
