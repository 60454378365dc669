//! The `host` module defines the per-scope topic registry.
//!
//! A `Host` owns every topic reachable from one survivable scope and holds
//! the rule deciding when a topic's resources are cleaned and when the topic
//! entry is evicted. It listens for the close event of every client it has
//! ever registered.

#[allow(clippy::module_inception)]
pub mod host;

pub use host::Host;
