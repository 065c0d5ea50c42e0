//! Registration sets for the fixed gesture event vocabulary.

use gesture_events::{GestureKind, SwipeDirection};

/// A registration slot: `None` is the direction-agnostic `swipe`/`swiping`
/// event, `Some` a specific direction.
pub type Slot = Option<SwipeDirection>;

const SLOT_ORDER: [Slot; 5] = [
    None,
    Some(SwipeDirection::Left),
    Some(SwipeDirection::Right),
    Some(SwipeDirection::Up),
    Some(SwipeDirection::Down),
];

/// Bitset over the five registration slots of one gesture kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: Self = Self(0);

    fn bit(slot: Slot) -> u8 {
        match slot {
            None => 1,
            Some(SwipeDirection::Left) => 1 << 1,
            Some(SwipeDirection::Right) => 1 << 2,
            Some(SwipeDirection::Up) => 1 << 3,
            Some(SwipeDirection::Down) => 1 << 4,
        }
    }

    pub fn insert(&mut self, slot: Slot) {
        self.0 |= Self::bit(slot);
    }

    pub fn remove(&mut self, slot: Slot) {
        self.0 &= !Self::bit(slot);
    }

    pub fn contains(&self, slot: Slot) -> bool {
        (self.0 & Self::bit(slot)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Registered event names for the given kind, in fixed slot order.
    pub fn names(&self, kind: GestureKind) -> Vec<&'static str> {
        SLOT_ORDER
            .iter()
            .filter(|slot| self.contains(**slot))
            .map(|slot| slot_name(kind, *slot))
            .collect()
    }
}

pub(crate) fn slot_name(kind: GestureKind, slot: Slot) -> &'static str {
    match (kind, slot) {
        (GestureKind::Swipe, None) => "swipe",
        (GestureKind::Swipe, Some(SwipeDirection::Left)) => "swipe-left",
        (GestureKind::Swipe, Some(SwipeDirection::Right)) => "swipe-right",
        (GestureKind::Swipe, Some(SwipeDirection::Up)) => "swipe-up",
        (GestureKind::Swipe, Some(SwipeDirection::Down)) => "swipe-down",
        (GestureKind::Swiping, None) => "swiping",
        (GestureKind::Swiping, Some(SwipeDirection::Left)) => "swiping-left",
        (GestureKind::Swiping, Some(SwipeDirection::Right)) => "swiping-right",
        (GestureKind::Swiping, Some(SwipeDirection::Up)) => "swiping-up",
        (GestureKind::Swiping, Some(SwipeDirection::Down)) => "swiping-down",
    }
}

/// Parse one event name from the fixed vocabulary. Unrecognized names map to
/// `None` and are dropped by the caller.
pub(crate) fn parse(name: &str) -> Option<(GestureKind, Slot)> {
    let parsed = match name {
        "swipe" => (GestureKind::Swipe, None),
        "swipe-left" => (GestureKind::Swipe, Some(SwipeDirection::Left)),
        "swipe-right" => (GestureKind::Swipe, Some(SwipeDirection::Right)),
        "swipe-up" => (GestureKind::Swipe, Some(SwipeDirection::Up)),
        "swipe-down" => (GestureKind::Swipe, Some(SwipeDirection::Down)),
        "swiping" => (GestureKind::Swiping, None),
        "swiping-left" => (GestureKind::Swiping, Some(SwipeDirection::Left)),
        "swiping-right" => (GestureKind::Swiping, Some(SwipeDirection::Right)),
        "swiping-up" => (GestureKind::Swiping, Some(SwipeDirection::Up)),
        "swiping-down" => (GestureKind::Swiping, Some(SwipeDirection::Down)),
        _ => return None,
    };
    Some(parsed)
}
