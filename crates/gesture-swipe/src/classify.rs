//! Dominant-axis swipe classification.

use gesture_events::{Point, SwipeDirection};

/// Classify a displacement against the pixel threshold.
///
/// The axis with the larger magnitude wins and must strictly exceed the
/// threshold; when both magnitudes are equal, the vertical axis is evaluated.
/// Returns `None` when the dominant axis stays within the threshold.
pub fn classify(delta: Point, threshold: u32) -> Option<SwipeDirection> {
    let threshold = threshold as f32;
    if delta.x.abs() > delta.y.abs() {
        if delta.x.abs() > threshold {
            Some(if delta.x < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            })
        } else {
            None
        }
    } else if delta.y.abs() > threshold {
        Some(if delta.y < 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        })
    } else {
        None
    }
}
