//! # Topicscope
//!
//! `topicscope` is an in-memory topic lifecycle engine. It lets independent,
//! short-lived components (think UI screens that are destroyed and recreated
//! on a reconfiguration event) share a logically single piece of state — a
//! *topic* — without leaking it and without tearing it down while someone
//! still needs it.
//!
//! Clients join a topic in one of two roles:
//!
//! - **Owner**: the topic's payload stays alive as long as at least one
//!   owner is registered.
//! - **Viewer**: observes the topic without keeping its payload alive.
//!
//! A topic's payload is released when the last owner leaves or when the
//! client count drops to a single remaining viewer; the topic entry itself
//! is evicted from its host once the last client is gone.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `topic`: The shared resource container — lazy payload, per-client roles,
//!   and named notification channels.
//! - `host`: Per-scope registry of topics; owns the eviction rule.
//! - `client`: Per-component handle that signals permanent destruction exactly once.
//! - `registry`: The survivable-object store (scope → host/client instances)
//!   and the `TopicManager` facade components actually call.
//! - `config`: Handles loading and managing configuration.
//! - `utils`: Contains shared utilities, such as error handling and logging.

pub mod client;
pub mod config;
pub mod host;
pub mod registry;
pub mod topic;
pub mod utils;

#[cfg(test)]
mod tests;
