use std::any::{Any, type_name};
use std::collections::HashMap;
use std::rc::Rc;

use crate::client::ClientId;
use crate::topic::channel::{Channel, ObserverFn};

/// Role of one client within one topic.
///
/// The role is local to the topic: a client owning one topic may be a plain
/// viewer of another.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClientInfo {
    pub is_owner: bool,
}

/// How to build a topic's payload, plus an optional release hook invoked on
/// resource cleanup (to close payload-held resources such as streams or
/// caches before the payload is dropped).
///
/// Factories are cheap to clone and are supplied at registration time, so a
/// topic type never needs to be instantiable by reflection or similar.
pub struct TopicFactory<M: 'static> {
    make_model: Rc<dyn Fn() -> M>,
    on_cleanup: Option<Rc<dyn Fn(&mut M)>>,
}

impl<M: 'static> TopicFactory<M> {
    pub fn new(make_model: impl Fn() -> M + 'static) -> Self {
        Self {
            make_model: Rc::new(make_model),
            on_cleanup: None,
        }
    }

    /// Attach a release hook called with the payload right before it is
    /// discarded by `Topic::cleanup_resource`.
    pub fn with_cleanup(mut self, on_cleanup: impl Fn(&mut M) + 'static) -> Self {
        self.on_cleanup = Some(Rc::new(on_cleanup));
        self
    }
}

impl<M: 'static> Clone for TopicFactory<M> {
    fn clone(&self) -> Self {
        Self {
            make_model: self.make_model.clone(),
            on_cleanup: self.on_cleanup.clone(),
        }
    }
}

impl<M: Default + 'static> Default for TopicFactory<M> {
    fn default() -> Self {
        Self::new(M::default)
    }
}

/// A topic is a place to hold a payload shared by several clients.
///
/// The payload (*model*) is created lazily on first access and memoized
/// until the next resource cleanup. Clients join with a role (owner or
/// viewer); the surrounding host uses the resulting counts to decide when
/// the payload is released and when the topic is evicted.
///
/// Clients can also communicate through named notification channels: a
/// channel comes into existence the first time someone listens on it, and
/// `notify` pushes the payload only through channels that already exist.
pub struct Topic<M: 'static> {
    id: String,
    model: Option<M>,
    factory: TopicFactory<M>,
    clients: HashMap<ClientId, ClientInfo>,
    owner_count: usize,
    channels: HashMap<String, Channel<M>>,
}

impl<M: 'static> Topic<M> {
    pub(crate) fn new(id: &str, factory: TopicFactory<M>) -> Self {
        Self {
            id: id.to_string(),
            model: None,
            factory,
            clients: HashMap::new(),
            owner_count: 0,
            channels: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get or lazily create the payload; memoized until the next
    /// `cleanup_resource`.
    pub fn model(&mut self) -> &mut M {
        let factory = &self.factory;
        self.model.get_or_insert_with(|| (factory.make_model)())
    }

    /// Whether the payload has been materialized.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Listen for pushes on `channel`, creating the channel on first use.
    ///
    /// The observer is keyed by `observer_id` scoped to this topic's id, so
    /// the same channel name used by two topics never collides. Listening
    /// twice with one id replaces the earlier observer instead of doubling
    /// delivery. If the channel holds a value pushed before this observer
    /// attached, the current payload is delivered to it immediately.
    pub fn listen(&mut self, channel: &str, observer_id: &str, observer: impl Fn(&M) + 'static) {
        let observer: ObserverFn<M> = Box::new(observer);
        let chan = self.channels.entry(channel.to_string()).or_default();

        if chan.has_pending() {
            if let Some(model) = self.model.as_ref() {
                observer(model);
            }
        }

        chan.observe(format!("{}:{}", self.id, observer_id), observer);
    }

    /// Drop the observer registered under `observer_id` on `channel`.
    /// Unknown channels or observer ids are a no-op.
    pub fn unlisten(&mut self, channel: &str, observer_id: &str) -> bool {
        match self.channels.get_mut(channel) {
            Some(chan) => chan.remove_observer(&format!("{}:{}", self.id, observer_id)),
            None => false,
        }
    }

    /// Push the current payload to `channel`'s observers without modifying it.
    pub fn notify(&mut self, channel: &str) {
        self.notify_with(channel, |_| {});
    }

    /// Modify the payload, then push it to `channel`'s observers — if and
    /// only if the channel already exists. Channels are observer-driven:
    /// notifying a channel nobody ever listened on is a silent no-op and the
    /// modifier does not run.
    pub fn notify_with(&mut self, channel: &str, modifier: impl FnOnce(&mut M)) {
        let Some(chan) = self.channels.get_mut(channel) else {
            return;
        };

        let factory = &self.factory;
        let model = self.model.get_or_insert_with(|| (factory.make_model)());

        modifier(model);
        chan.push(model);
    }

    /// Release this topic's resources: run the factory's release hook on the
    /// payload (when one is materialized), discard the payload, and forget
    /// every channel's pending value.
    ///
    /// Observer registrations and the client list survive, so a topic can be
    /// reused by a new client without rebuilding its channel graph. Safe to
    /// call on an already-clean topic.
    pub fn cleanup_resource(&mut self) {
        if let Some(model) = self.model.as_mut() {
            if let Some(on_cleanup) = self.factory.on_cleanup.as_ref() {
                on_cleanup(model);
            }
        }
        self.model = None;

        for chan in self.channels.values_mut() {
            chan.clear_pending();
        }
    }

    /// Add a client with the given role.
    ///
    /// Returns TRUE if the client was not present before. Re-adding an
    /// existing client is idempotent; promoting it to owner bumps the owner
    /// count exactly once, and a `make_owner = false` call never demotes.
    pub(crate) fn add_client(&mut self, client: ClientId, make_owner: bool) -> bool {
        let mut newly_added = false;
        let info = self.clients.entry(client).or_insert_with(|| {
            newly_added = true;
            ClientInfo::default()
        });

        if make_owner && !info.is_owner {
            info.is_owner = true;
            self.owner_count += 1;
        }

        newly_added
    }

    /// Remove a client. Returns TRUE if it was present; an owner's removal
    /// decrements the owner count.
    pub(crate) fn remove_client(&mut self, client: &ClientId) -> bool {
        match self.clients.remove(client) {
            Some(info) => {
                if info.is_owner {
                    self.owner_count -= 1;
                }
                true
            }
            None => false,
        }
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn owner_count(&self) -> usize {
        self.owner_count
    }
}

impl<M: 'static> std::fmt::Debug for Topic<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Topic")
            .field("id", &self.id)
            .field("has_model", &self.model.is_some())
            .field("client_count", &self.clients.len())
            .field("owner_count", &self.owner_count)
            .finish_non_exhaustive()
    }
}

/// Object-safe view of a topic, letting a host hold topics of mixed payload
/// types in one registry and still drive the lifecycle bookkeeping.
pub(crate) trait AnyTopic {
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn model_type(&self) -> &'static str;
    fn add_client(&mut self, client: ClientId, make_owner: bool) -> bool;
    fn remove_client(&mut self, client: &ClientId) -> bool;
    fn client_count(&self) -> usize;
    fn owner_count(&self) -> usize;
    fn cleanup_resource(&mut self);
}

impl<M: 'static> AnyTopic for Topic<M> {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn model_type(&self) -> &'static str {
        type_name::<M>()
    }

    fn add_client(&mut self, client: ClientId, make_owner: bool) -> bool {
        Topic::add_client(self, client, make_owner)
    }

    fn remove_client(&mut self, client: &ClientId) -> bool {
        Topic::remove_client(self, client)
    }

    fn client_count(&self) -> usize {
        Topic::client_count(self)
    }

    fn owner_count(&self) -> usize {
        Topic::owner_count(self)
    }

    fn cleanup_resource(&mut self) {
        Topic::cleanup_resource(self)
    }
}
