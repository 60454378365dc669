use std::cell::RefCell;
use std::rc::Rc;

use super::ClientHandle;
use crate::host::Host;
use crate::topic::TopicFactory;

#[derive(Debug, Default)]
struct Counter {
    count: i64,
}

fn new_client(id: &str) -> Rc<RefCell<ClientHandle>> {
    Rc::new(RefCell::new(ClientHandle::new(id)))
}

fn new_host(scope: &str) -> Rc<RefCell<Host>> {
    Rc::new(RefCell::new(Host::new(scope)))
}

#[test]
fn test_client_new() {
    let client = new_client("a");
    assert_eq!(client.borrow().id(), "a");
    assert!(!client.borrow().is_closed());
    assert_eq!(client.borrow().listener_count(), 0);
}

#[test]
fn test_listener_set_is_idempotent() {
    let client = new_client("a");
    let host = new_host("app");

    assert!(client.borrow_mut().add_listener("app", Rc::downgrade(&host)));
    assert!(!client.borrow_mut().add_listener("app", Rc::downgrade(&host)));
    assert_eq!(client.borrow().listener_count(), 1);

    assert!(client.borrow_mut().remove_listener("app"));
    assert!(!client.borrow_mut().remove_listener("app"));
    assert_eq!(client.borrow().listener_count(), 0);
}

#[test]
fn test_close_notifies_every_listening_host() {
    let client = new_client("a");
    let host_one = new_host("app");
    let host_two = new_host("screen");
    let factory = TopicFactory::<Counter>::default();

    Host::register_client(&host_one, "t1", &factory, &client, true).unwrap();
    Host::register_client(&host_two, "t2", &factory, &client, true).unwrap();
    assert_eq!(client.borrow().listener_count(), 2);

    ClientHandle::close(&client);

    // Sole client everywhere: both hosts evicted their topic
    assert!(client.borrow().is_closed());
    assert_eq!(client.borrow().listener_count(), 0);
    assert_eq!(host_one.borrow().topic_count(), 0);
    assert_eq!(host_two.borrow().topic_count(), 0);
}

#[test]
fn test_close_fires_at_most_once() {
    let client = new_client("a");
    let host = new_host("app");
    let factory = TopicFactory::<Counter>::default();

    Host::register_client(&host, "t", &factory, &client, true).unwrap();
    ClientHandle::close(&client);
    assert_eq!(host.borrow().topic_count(), 0);

    // A second close must not fire anything
    ClientHandle::close(&client);
    assert!(client.borrow().is_closed());
}

#[test]
fn test_listeners_added_after_close_are_never_notified() {
    let client = new_client("a");
    ClientHandle::close(&client);

    let host = new_host("app");
    {
        let mut h = host.borrow_mut();
        let factory = TopicFactory::<Counter>::default();
        let topic = h.obtain_topic("t", &factory).unwrap();
        topic.add_client("a".to_string(), true);
    }
    client.borrow_mut().add_listener("app", Rc::downgrade(&host));

    ClientHandle::close(&client);
    // The dead handle accepted the listener but never fired it
    assert!(host.borrow().contains_topic("t"));
}

#[test]
fn test_close_skips_dropped_hosts() {
    let client = new_client("a");
    let host = new_host("app");
    let factory = TopicFactory::<Counter>::default();
    Host::register_client(&host, "t", &factory, &client, true).unwrap();

    drop(host);
    // Listener host is gone; close must not panic
    ClientHandle::close(&client);
    assert!(client.borrow().is_closed());
}
