//! Per-topic notification channels.
//!
//! A `Channel` holds the observers registered under one channel name inside
//! one topic. Observers are stored in a map keyed by observer id, so a
//! repeated `observe` with the same id replaces the prior registration and
//! never duplicates delivery.
//!
//! A channel remembers whether it holds a *pending* (sticky) value: a push
//! that happened before some observer attached. The topic uses that mark to
//! deliver the current payload to a newly attached observer, and clears it
//! on resource cleanup so a stale value is never redelivered into a fresh
//! payload generation.

use std::collections::HashMap;

pub type ObserverFn<M> = Box<dyn Fn(&M)>;

pub struct Channel<M: 'static> {
    observers: HashMap<String, ObserverFn<M>>,
    has_pending: bool,
}

impl<M: 'static> Channel<M> {
    pub fn new() -> Self {
        Self {
            observers: HashMap::new(),
            has_pending: false,
        }
    }

    /// Register `observer` under `observer_id`, replacing any prior
    /// registration with the same id.
    pub fn observe(&mut self, observer_id: String, observer: ObserverFn<M>) {
        self.observers.insert(observer_id, observer);
    }

    /// Remove the observer registered under `observer_id`, if any.
    pub fn remove_observer(&mut self, observer_id: &str) -> bool {
        self.observers.remove(observer_id).is_some()
    }

    /// Synchronously deliver `model` to every observer, then mark the value
    /// as pending for observers that attach later.
    pub fn push(&mut self, model: &M) {
        for observer in self.observers.values() {
            observer(model);
        }
        self.has_pending = true;
    }

    /// Whether a pushed value has not yet been forgotten via `clear_pending`.
    pub fn has_pending(&self) -> bool {
        self.has_pending
    }

    /// Forget the sticky value mark; observer registrations are untouched.
    pub fn clear_pending(&mut self) {
        self.has_pending = false;
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<M: 'static> Default for Channel<M> {
    fn default() -> Self {
        Self::new()
    }
}
