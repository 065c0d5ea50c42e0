//! Bootstrap demo: builds a scripted host window and surface, wires one
//! swipe observer to them, and logs everything the engine reports while a
//! scripted pointer session plays back.
//!
//! Run with `RUST_LOG=debug` to also see the engine's listener bookkeeping.

use gesture_events::{GestureNotification, Modality, NotificationListener, PointerType, Rect};
use gesture_input::{ModalityListener, PointerDetector};
use gesture_swipe::SwipeObserver;
use gesture_testing::{sample_at, ScriptedTarget, StaticCapabilities};
use std::rc::Rc;
use web_time::Instant;

struct LogNotifications(&'static str);

impl NotificationListener for LogNotifications {
    fn handle(&self, notification: &GestureNotification) {
        log::info!(
            "{}: {:?} delta=({}, {}) duration={}ms",
            self.0,
            notification.direction,
            notification.delta_x,
            notification.delta_y,
            notification.duration_ms
        );
    }
}

struct LogModality;

impl ModalityListener for LogModality {
    fn modality_changed(&self, modality: Modality) {
        log::info!("modality is now {modality:?}");
    }
}

fn main() {
    let _ = env_logger::try_init();

    let started = Instant::now();
    let now = |offset: u64| started.elapsed().as_millis() as u64 + offset;

    let window = ScriptedTarget::new();
    let surface = ScriptedTarget::with_bounds(Rect::new(0.0, 0.0, 320.0, 240.0));
    let caps = StaticCapabilities {
        pointer_events: true,
        touch_events: true,
    };
    let detector = PointerDetector::new(&caps, window.clone());
    detector.subscribe(Rc::new(LogModality));

    let observer = SwipeObserver::new(
        surface.clone(),
        detector,
        Some("swipe swipe-left swiping"),
        None,
        None,
    );
    for name in ["swipe", "swipe-left", "swiping"] {
        surface.add_notification_listener(name, Rc::new(LogNotifications(name)));
    }
    log::info!("registered events: {:?}", observer.events());

    // A left swipe: press, two qualifying moves, release.
    surface.deliver(
        "pointerdown",
        sample_at(now(0), PointerType::Touch, 300.0, 120.0),
    );
    surface.deliver(
        "touchmove",
        sample_at(now(80), PointerType::Touch, 250.0, 120.0),
    );
    surface.deliver(
        "touchmove",
        sample_at(now(160), PointerType::Touch, 180.0, 120.0),
    );
    surface.deliver(
        "touchend",
        sample_at(now(240), PointerType::Touch, 180.0, 120.0),
    );

    // A drag too short to qualify: nothing fires.
    surface.deliver(
        "pointerdown",
        sample_at(now(1000), PointerType::Touch, 100.0, 100.0),
    );
    surface.deliver(
        "touchmove",
        sample_at(now(1080), PointerType::Touch, 110.0, 100.0),
    );
    surface.deliver(
        "touchend",
        sample_at(now(1160), PointerType::Touch, 110.0, 100.0),
    );

    // Plugging in a mouse re-routes motion tracking for the next gesture.
    window.deliver(
        "pointermove",
        sample_at(now(2000), PointerType::Mouse, 0.0, 0.0),
    );

    observer.off(Some("swipe-left"));
    log::info!("after off(swipe-left): {:?}", observer.events());
    observer.off(None);
    log::info!("observer active: {}", observer.active());
    log::info!(
        "session dispatched {} notifications",
        surface.notifications().len()
    );
}
