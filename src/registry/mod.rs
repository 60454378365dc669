//! The `registry` module wires the lifecycle engine to its callers.
//!
//! `ScopeRegistry` plays the platform's survivable-object store: it hands
//! out the one host per scope and the one client handle per component, and
//! runs their teardown hooks when a scope is permanently destroyed.
//! `TopicManager` is the facade components register and unregister through.

pub mod manager;
pub mod scope;

pub use manager::TopicManager;
pub use scope::{ScopeId, ScopeRegistry};
