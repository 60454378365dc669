//! The `topic` module defines the shared resource container of the system.
//!
//! A `Topic` holds a lazily-created payload, the set of clients registered
//! to it (each with an owner/viewer role), and the named notification
//! channels clients use to push payload changes to each other. The
//! reference-counting bookkeeping kept here is what drives the host's
//! eviction rule.

pub mod channel;
#[allow(clippy::module_inception)]
pub mod topic;

pub use topic::{ClientInfo, Topic, TopicFactory};
