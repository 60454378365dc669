//! End-to-end scenario tests exercising the whole lifecycle: facade,
//! survivable scopes, channels, and the eviction rule working together.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::registry::{ScopeRegistry, TopicManager};
use crate::topic::TopicFactory;

#[derive(Debug, Default)]
struct Counter {
    count: i64,
}

#[test]
fn test_shared_counter_topic_end_to_end() {
    let mut scopes = ScopeRegistry::new();

    let built = Rc::new(Cell::new(0usize));
    let factory = {
        let built = built.clone();
        TopicFactory::new(move || {
            built.set(built.get() + 1);
            Counter::default()
        })
    };
    let manager = TopicManager::new("app", "T", factory);

    // A arrives and owns the topic; payload starts fresh
    manager.register(&mut scopes, "A", true).unwrap();
    assert_eq!(manager.model(&mut scopes, |m| m.count).unwrap(), 0);

    // B arrives as a viewer
    manager.register(&mut scopes, "B", false).unwrap();

    // Nobody listens on "inc" yet: the notify is a silent no-op
    manager
        .with_topic(&mut scopes, |t| t.notify_with("inc", |m| m.count += 1))
        .unwrap();
    assert_eq!(manager.model(&mut scopes, |m| m.count).unwrap(), 0);

    // B starts listening, A notifies
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = seen.clone();
        manager
            .with_topic(&mut scopes, |t| {
                t.listen("inc", "B", move |m| seen.borrow_mut().push(m.count))
            })
            .unwrap();
    }
    manager
        .with_topic(&mut scopes, |t| t.notify_with("inc", |m| m.count += 1))
        .unwrap();
    assert_eq!(*seen.borrow(), vec![1]);

    // A is permanently destroyed: last owner gone, resource cleaned,
    // topic entry kept alive for the remaining viewer
    scopes.destroy_scope("A");
    assert!(scopes.host("app").borrow().contains_topic("T"));
    assert_eq!(manager.model(&mut scopes, |m| m.count).unwrap(), 0);
    assert_eq!(built.get(), 2);

    // B is destroyed too: the topic entry leaves the host
    scopes.destroy_scope("B");
    assert!(!scopes.host("app").borrow().contains_topic("T"));
}

#[test]
fn test_component_survives_reconfiguration() {
    let mut scopes = ScopeRegistry::new();
    let manager = TopicManager::new("app", "T", TopicFactory::<Counter>::default());

    // First incarnation of the component registers and mutates the payload
    manager.register(&mut scopes, "screen", true).unwrap();
    manager.model(&mut scopes, |m| m.count = 11).unwrap();

    // A reconfiguration destroys the UI object but not its scope: the next
    // incarnation resolves the same handle and sees the same payload
    manager.register(&mut scopes, "screen", true).unwrap();
    assert_eq!(manager.model(&mut scopes, |m| m.count).unwrap(), 11);
    {
        let host = scopes.host("app");
        let host = host.borrow();
        assert!(host.contains_topic("T"));
    }
    assert_eq!(scopes.client("screen").borrow().listener_count(), 1);

    // Only the permanent destruction tears the topic down
    scopes.destroy_scope("screen");
    assert!(!scopes.host("app").borrow().contains_topic("T"));
}
