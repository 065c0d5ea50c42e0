//! Swipe gesture recognition: classifies raw pointer motion on an observed
//! surface into terminal (`swipe`) and continuous (`swiping`) directional
//! events.

pub mod classify;
pub mod observer;
pub mod registration;

pub use classify::classify;
pub use observer::{SwipeObserver, DEFAULT_THRESHOLD, DEFAULT_TIMEOUT_MS};
pub use registration::DirectionSet;
