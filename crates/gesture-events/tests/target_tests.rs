use gesture_events::{
    add_listener_once, Contact, EventTarget, InputEvent, ListenerOptions, Point, PointerSample,
    PointerType,
};
use gesture_testing::{sample_at, CountingListener, ScriptedTarget};
use std::rc::Rc;

#[test]
fn prevent_default_is_noop_when_not_cancelable() {
    let mut sample = sample_at(0, PointerType::Touch, 10.0, 10.0);
    sample.cancelable = false;
    let event = InputEvent::new(sample);
    event.prevent_default();
    assert!(!event.default_prevented());

    let event = InputEvent::new(sample_at(0, PointerType::Touch, 10.0, 10.0));
    event.prevent_default();
    assert!(event.default_prevented());
}

#[test]
fn primary_contact_is_the_first_one() {
    let mut sample = PointerSample::new(
        0,
        PointerType::Touch,
        Contact::new(Point::new(1.0, 2.0), Point::new(1.0, 2.0)),
    );
    sample
        .contacts
        .push(Contact::new(Point::new(9.0, 9.0), Point::new(9.0, 9.0)));

    let primary = sample.primary().unwrap();
    assert_eq!(primary.client, Point::new(1.0, 2.0));
}

#[test]
fn primary_contact_of_empty_sample_is_none() {
    let mut sample = sample_at(0, PointerType::Touch, 0.0, 0.0);
    sample.contacts.clear();
    assert!(sample.primary().is_none());
}

#[test]
fn adding_the_same_listener_twice_installs_it_once() {
    let target = ScriptedTarget::new();
    let listener = CountingListener::new();
    let handle: Rc<dyn gesture_events::InputListener> = listener.clone();

    target.add_listener("pointermove", handle.clone(), ListenerOptions::default());
    target.add_listener("pointermove", handle.clone(), ListenerOptions::default());
    assert_eq!(target.listener_count("pointermove"), 1);

    target.deliver("pointermove", sample_at(0, PointerType::Mouse, 0.0, 0.0));
    assert_eq!(listener.hits(), 1);

    target.remove_listener("pointermove", &handle);
    assert_eq!(target.listener_count("pointermove"), 0);
}

#[test]
fn once_listener_uses_the_option_form_when_supported() {
    let target = ScriptedTarget::new();
    let listener = CountingListener::new();
    let as_target: Rc<dyn EventTarget> = target.clone();

    add_listener_once(&as_target, "pointerdown", listener.clone());
    target.deliver("pointerdown", sample_at(0, PointerType::Touch, 0.0, 0.0));
    target.deliver("pointerdown", sample_at(1, PointerType::Touch, 0.0, 0.0));

    assert_eq!(listener.hits(), 1);
    assert_eq!(target.listener_count("pointerdown"), 0);
}

#[test]
fn once_listener_falls_back_to_a_self_removing_wrapper() {
    let target = ScriptedTarget::new();
    target.ignore_listener_options();
    let listener = CountingListener::new();
    let as_target: Rc<dyn EventTarget> = target.clone();

    add_listener_once(&as_target, "pointerdown", listener.clone());
    assert_eq!(target.listener_count("pointerdown"), 1);

    target.deliver("pointerdown", sample_at(0, PointerType::Touch, 0.0, 0.0));
    assert_eq!(listener.hits(), 1);
    assert_eq!(target.listener_count("pointerdown"), 0);

    target.deliver("pointerdown", sample_at(1, PointerType::Touch, 0.0, 0.0));
    assert_eq!(listener.hits(), 1);
}
