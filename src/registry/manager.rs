use crate::host::Host;
use crate::registry::scope::{ScopeId, ScopeRegistry};
use crate::topic::{Topic, TopicFactory};
use crate::utils::error::TopicError;

/// Facade binding one (host scope, topic id, payload type) triple to the
/// components that call it.
///
/// This is the surface UI components are meant to use: it resolves the host
/// for the topic's survivable scope and the client handle for the calling
/// component, then forwards to the right host/topic pair. Direct host and
/// topic access stays inside the crate.
pub struct TopicManager<M: 'static> {
    host_scope: ScopeId,
    topic_id: String,
    factory: TopicFactory<M>,
}

impl<M: 'static> TopicManager<M> {
    pub fn new(host_scope: &str, topic_id: &str, factory: TopicFactory<M>) -> Self {
        Self {
            host_scope: host_scope.to_string(),
            topic_id: topic_id.to_string(),
            factory,
        }
    }

    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    /// Register the component living in `client_scope` with the topic. With
    /// `make_owner` set, the component becomes (or stays) an owner.
    pub fn register(
        &self,
        scopes: &mut ScopeRegistry,
        client_scope: &str,
        make_owner: bool,
    ) -> Result<(), TopicError> {
        let host = scopes.host(&self.host_scope);
        let client = scopes.client(client_scope);
        Host::register_client(&host, &self.topic_id, &self.factory, &client, make_owner)
    }

    /// Remove the component living in `client_scope` from the topic.
    ///
    /// The host keeps listening for that component's close event; only the
    /// topic membership is dropped.
    pub fn unregister(&self, scopes: &mut ScopeRegistry, client_scope: &str) {
        let host = scopes.host(&self.host_scope);
        let client = scopes.client(client_scope);
        let client_id = client.borrow().id().to_string();
        host.borrow_mut().unregister_client(&self.topic_id, &client_id);
    }

    /// Run `f` against the topic (payload, channels) and return its result.
    /// Creates the topic when absent, like the register path does.
    pub fn with_topic<R>(
        &self,
        scopes: &mut ScopeRegistry,
        f: impl FnOnce(&mut Topic<M>) -> R,
    ) -> Result<R, TopicError> {
        let host = scopes.host(&self.host_scope);
        let mut host = host.borrow_mut();
        let topic = host.obtain_topic(&self.topic_id, &self.factory)?;
        Ok(f(topic))
    }

    /// Run `f` against the (lazily created) payload and return its result.
    pub fn model<R>(
        &self,
        scopes: &mut ScopeRegistry,
        f: impl FnOnce(&mut M) -> R,
    ) -> Result<R, TopicError> {
        self.with_topic(scopes, |topic| f(topic.model()))
    }
}
