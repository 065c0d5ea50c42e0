use crate::detector::{ModalityListener, PointerDetector};
use crate::interface::EventInterface;
use gesture_events::{Modality, PointerType};
use gesture_testing::{sample_at, ScriptedTarget, StaticCapabilities};
use std::cell::RefCell;
use std::rc::Rc;

struct RecordingSubscriber {
    seen: RefCell<Vec<Modality>>,
}

impl RecordingSubscriber {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            seen: RefCell::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<Modality> {
        self.seen.borrow().clone()
    }
}

impl ModalityListener for RecordingSubscriber {
    fn modality_changed(&self, modality: Modality) {
        self.seen.borrow_mut().push(modality);
    }
}

struct TaggedSubscriber {
    tag: &'static str,
    order: Rc<RefCell<Vec<&'static str>>>,
}

impl ModalityListener for TaggedSubscriber {
    fn modality_changed(&self, _modality: Modality) {
        self.order.borrow_mut().push(self.tag);
    }
}

fn pointer_host() -> (Rc<ScriptedTarget>, Rc<PointerDetector>) {
    let window = ScriptedTarget::new();
    let caps = StaticCapabilities {
        pointer_events: true,
        touch_events: true,
    };
    let detector = PointerDetector::new(&caps, window.clone());
    (window, detector)
}

#[test]
fn mouse_interface_fixes_modality_at_construction() {
    let window = ScriptedTarget::new();
    let detector = PointerDetector::new(&StaticCapabilities::default(), window.clone());

    assert_eq!(detector.event_interface(), EventInterface::Mouse);
    assert_eq!(detector.modality(), Modality::Mouse);
    // No device watching outside the pointer interface.
    assert!(window.installed_events().is_empty());

    window.deliver("mousemove", sample_at(0, PointerType::Touch, 0.0, 0.0));
    assert_eq!(detector.modality(), Modality::Mouse);
}

#[test]
fn touch_interface_fixes_modality_at_construction() {
    let window = ScriptedTarget::new();
    let caps = StaticCapabilities {
        pointer_events: false,
        touch_events: true,
    };
    let detector = PointerDetector::new(&caps, window.clone());

    assert_eq!(detector.event_interface(), EventInterface::Touch);
    assert_eq!(detector.modality(), Modality::Touch);
    assert!(window.installed_events().is_empty());
}

#[test]
fn pointer_interface_starts_touch_and_watches_move_and_down() {
    let (window, detector) = pointer_host();

    assert_eq!(detector.event_interface(), EventInterface::Pointer);
    assert_eq!(detector.modality(), Modality::Touch);
    assert_eq!(window.listener_count("pointermove"), 1);
    assert_eq!(window.listener_count("pointerdown"), 1);
}

#[test]
fn switch_to_mouse_disarms_the_move_watch() {
    let (window, detector) = pointer_host();
    let subscriber = RecordingSubscriber::new();
    detector.subscribe(subscriber.clone());

    window.deliver("pointermove", sample_at(10, PointerType::Mouse, 5.0, 5.0));

    assert_eq!(detector.modality(), Modality::Mouse);
    assert_eq!(window.listener_count("pointermove"), 0);
    assert_eq!(window.listener_count("pointerdown"), 1);
    assert_eq!(subscriber.seen(), vec![Modality::Mouse]);
}

#[test]
fn press_switches_back_and_rearms_the_move_watch() {
    let (window, detector) = pointer_host();
    let subscriber = RecordingSubscriber::new();
    detector.subscribe(subscriber.clone());

    window.deliver("pointermove", sample_at(10, PointerType::Mouse, 5.0, 5.0));
    window.deliver("pointerdown", sample_at(20, PointerType::Touch, 5.0, 5.0));

    assert_eq!(detector.modality(), Modality::Touch);
    assert_eq!(window.listener_count("pointermove"), 1);
    assert_eq!(subscriber.seen(), vec![Modality::Mouse, Modality::Touch]);
}

#[test]
fn pen_input_is_folded_into_touch() {
    let (window, detector) = pointer_host();
    let subscriber = RecordingSubscriber::new();
    detector.subscribe(subscriber.clone());

    // Already in the touch bucket, so pen input is not a change.
    window.deliver("pointerdown", sample_at(10, PointerType::Pen, 5.0, 5.0));
    assert_eq!(detector.modality(), Modality::Touch);
    assert!(subscriber.seen().is_empty());

    window.deliver("pointermove", sample_at(20, PointerType::Mouse, 5.0, 5.0));
    window.deliver("pointerdown", sample_at(30, PointerType::Pen, 5.0, 5.0));
    assert_eq!(detector.modality(), Modality::Touch);
    assert_eq!(subscriber.seen(), vec![Modality::Mouse, Modality::Touch]);
}

#[test]
fn duplicate_subscription_notifies_once_per_change() {
    let (window, detector) = pointer_host();
    let subscriber = RecordingSubscriber::new();
    let handle: Rc<dyn ModalityListener> = subscriber.clone();
    detector.subscribe(handle.clone());
    detector.subscribe(handle.clone());

    window.deliver("pointermove", sample_at(10, PointerType::Mouse, 5.0, 5.0));
    assert_eq!(subscriber.seen(), vec![Modality::Mouse]);

    detector.unsubscribe(&handle);
    window.deliver("pointerdown", sample_at(20, PointerType::Touch, 5.0, 5.0));
    assert_eq!(subscriber.seen(), vec![Modality::Mouse]);
}

#[test]
fn unsubscribe_without_subscribe_is_a_noop() {
    let (_window, detector) = pointer_host();
    let handle: Rc<dyn ModalityListener> = RecordingSubscriber::new();
    detector.unsubscribe(&handle);
}

#[test]
fn subscribers_fire_in_subscription_order() {
    let (window, detector) = pointer_host();
    let order = Rc::new(RefCell::new(Vec::new()));
    detector.subscribe(Rc::new(TaggedSubscriber {
        tag: "first",
        order: order.clone(),
    }));
    detector.subscribe(Rc::new(TaggedSubscriber {
        tag: "second",
        order: order.clone(),
    }));

    window.deliver("pointermove", sample_at(10, PointerType::Mouse, 5.0, 5.0));
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}
