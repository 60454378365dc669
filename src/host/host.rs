use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, info};

use crate::client::{ClientHandle, ClientId};
use crate::registry::ScopeId;
use crate::topic::topic::AnyTopic;
use crate::topic::{Topic, TopicFactory};
use crate::utils::error::TopicError;

/// Per-scope registry mapping topic ids to topics.
///
/// Design principle:
/// - Each survivable scope (app, screen, ...) holds exactly one host.
/// - A host holds multiple topics; a topic holds multiple clients.
/// - When a client is permanently destroyed it notifies every listening
///   host, which removes it from all topics and applies the eviction rule.
/// - When the host's own scope is destroyed, every topic is cleaned and the
///   registry cleared.
///
/// The eviction rule, applied once per client-removal by comparing counts
/// before and after:
/// - resources are cleaned when the client count drops from 2+ to 1 or less,
///   or when the owner count drops from 1+ to 0 — the topic either stopped
///   being shared or lost the last authority keeping its state alive;
/// - the topic entry itself is removed once the client count reaches 0.
///
/// Both checks are independent and may fire on the same removal. A lone
/// surviving viewer does not re-trigger cleanup by lingering: the resource
/// stays untouched until that viewer also leaves.
pub struct Host {
    scope: ScopeId,
    topics: HashMap<String, Box<dyn AnyTopic>>,
}

impl Host {
    pub(crate) fn new(scope: &str) -> Self {
        Self {
            scope: scope.to_string(),
            topics: HashMap::new(),
        }
    }

    /// The survivable scope this host is bound to.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn contains_topic(&self, id: &str) -> bool {
        self.topics.contains_key(id)
    }

    /// Get or create the topic registered under `id`.
    ///
    /// Fails with a construction error when the id is already held by a
    /// topic with a different payload type — the only checked failure in the
    /// engine.
    pub(crate) fn obtain_topic<M: 'static>(
        &mut self,
        id: &str,
        factory: &TopicFactory<M>,
    ) -> Result<&mut Topic<M>, TopicError> {
        let entry = self
            .topics
            .entry(id.to_string())
            .or_insert_with(|| Box::new(Topic::new(id, factory.clone())));

        let stored = entry.model_type();
        entry
            .as_any_mut()
            .downcast_mut::<Topic<M>>()
            .ok_or_else(|| TopicError::Construction {
                id: id.to_string(),
                requested: std::any::type_name::<M>(),
                stored,
            })
    }

    /// Register `client` at the topic under `id`.
    ///
    /// The host starts listening for the client's close event (idempotent),
    /// then the client joins the topic in the requested role.
    pub(crate) fn register_client<M: 'static>(
        host: &Rc<RefCell<Host>>,
        id: &str,
        factory: &TopicFactory<M>,
        client: &Rc<RefCell<ClientHandle>>,
        make_owner: bool,
    ) -> Result<(), TopicError> {
        let client_id = client.borrow().id().to_string();

        let scope = {
            let mut h = host.borrow_mut();
            let scope = h.scope.clone();

            let topic = h.obtain_topic(id, factory)?;
            topic.add_client(client_id, make_owner);
            scope
        };

        // Listen for the client's destroy-event: when the client goes, every
        // topic under this host may be affected.
        client
            .borrow_mut()
            .add_listener(&scope, Rc::downgrade(host));

        Ok(())
    }

    /// Remove `client` from the topic under `id`; unknown ids are a no-op.
    ///
    /// The host keeps listening for the client's close event: the client may
    /// still belong to other topics here, and the final close is still
    /// needed to know it is gone for good.
    pub(crate) fn unregister_client(&mut self, id: &str, client: &ClientId) {
        self.remove_client_from_topic(id, client);
    }

    /// Invoked by the close-listener contract when a client is permanently
    /// destroyed. Stops listening to the handle (it will never fire again),
    /// then removes the client from every topic, applying the eviction rule
    /// per topic.
    pub(crate) fn on_client_closed(&mut self, client: &Rc<RefCell<ClientHandle>>) {
        let client_id = {
            let mut handle = client.borrow_mut();
            handle.remove_listener(&self.scope);
            handle.id().to_string()
        };

        let ids: Vec<String> = self.topics.keys().cloned().collect();
        for id in ids {
            self.remove_client_from_topic(&id, &client_id);
        }
    }

    fn remove_client_from_topic(&mut self, id: &str, client: &ClientId) {
        let Some(topic) = self.topics.get_mut(id) else {
            return;
        };

        let prev_clients = topic.client_count();
        let prev_owners = topic.owner_count();

        if !topic.remove_client(client) {
            return;
        }

        let cur_clients = topic.client_count();
        let cur_owners = topic.owner_count();

        // Clients: 2+ -> 1-, or owners: 1+ -> 0
        if (prev_clients >= 2 && cur_clients <= 1) || (prev_owners >= 1 && cur_owners == 0) {
            topic.cleanup_resource();
            debug!(
                topic = id,
                prev_clients, cur_clients, prev_owners, cur_owners, "topic resource cleaned up"
            );
        }

        // Clients: down to 0 -> drop the registry entry
        if cur_clients == 0 {
            self.topics.remove(id);
            debug!(topic = id, "topic removed from host");
        }
    }

    /// Clean the resources of the topic under `id` without removing it.
    /// Unknown ids are a no-op.
    pub fn cleanup_topic(&mut self, id: &str) {
        if let Some(topic) = self.topics.get_mut(id) {
            topic.cleanup_resource();
            info!(topic = id, "topic resource cleaned up on request");
        }
    }

    /// Clean and remove the topic under `id`. Unknown ids are a no-op.
    pub fn close_topic(&mut self, id: &str) {
        if let Some(mut topic) = self.topics.remove(id) {
            topic.cleanup_resource();
            info!(topic = id, "topic closed on request");
        }
    }

    /// Invoked when this host's own scope is torn down: clean every topic
    /// and clear the registry.
    ///
    /// No client-removal pass runs here — the scope only dies after all of
    /// this host's clients have already closed individually.
    pub(crate) fn on_host_closed(&mut self) {
        for topic in self.topics.values_mut() {
            topic.cleanup_resource();
        }
        self.topics.clear();

        info!(scope = %self.scope, "host closed, all topics dropped");
    }
}
