//! Registry dispatch specs
//!
//! Verify notifications reach the observers registered under their name.

use crate::prelude::*;

#[test]
fn registered_observer_receives_notification() {
    let registry = ObserverRegistry::new();
    let this = ObserverTest::new();
    registry.register_observer(OBSERVER_TEST_NOTE, Arc::new(ObserverTest::observer(&this)));

    let notified = registry.notify_observers(&test_note(10)).unwrap();

    assert_eq!(notified, 1);
    this.assert_received(10);
}

#[test]
fn observers_of_other_names_are_not_notified() {
    let registry = ObserverRegistry::new();
    let this = ObserverTest::new();
    registry.register_observer("SomethingElse", Arc::new(ObserverTest::observer(&this)));

    assert_eq!(registry.notify_observers(&test_note(10)).unwrap(), 0);
    assert_eq!(this.observer_test_var(), None);
}

#[test]
fn removed_observer_is_not_notified() {
    let registry = ObserverRegistry::new();
    let kept = ObserverTest::new();
    let removed = ObserverTest::new();
    registry.register_observer(OBSERVER_TEST_NOTE, Arc::new(ObserverTest::observer(&kept)));
    registry.register_observer(OBSERVER_TEST_NOTE, Arc::new(ObserverTest::observer(&removed)));

    assert!(registry.remove_observer(OBSERVER_TEST_NOTE, &removed));
    registry.notify_observers(&test_note(5)).unwrap();

    kept.assert_received(5);
    assert_eq!(removed.observer_test_var(), None);
}

#[test]
fn observers_of_different_context_types_share_a_name() {
    let registry = ObserverRegistry::new();
    let this = ObserverTest::new();
    let names = Arc::new(Mutex::new(Vec::<String>::new()));
    registry.register_observer(OBSERVER_TEST_NOTE, Arc::new(ObserverTest::observer(&this)));
    registry.register_observer(
        OBSERVER_TEST_NOTE,
        Arc::new(Observer::new(
            |seen: &Mutex<Vec<String>>, note: &Notification| seen.lock().push(note.name().to_string()),
            Arc::clone(&names),
        )),
    );

    assert_eq!(registry.notify_observers(&test_note(1)).unwrap(), 2);

    this.assert_received(1);
    assert_eq!(*names.lock(), vec![OBSERVER_TEST_NOTE.to_string()]);

    // Removing by one context leaves the other type's observer in place
    assert!(registry.remove_observer(OBSERVER_TEST_NOTE, &this));
    assert_eq!(registry.observer_count(OBSERVER_TEST_NOTE), 1);
}
