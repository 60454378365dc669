//! The `error` module defines the error type used within the `topicscope` crate.
//!
//! The lifecycle engine has exactly one checked failure path: a topic could
//! not be produced under the requested payload type. Everything else that
//! might look like a failure — unregistering from an unknown topic, cleaning
//! an already-clean topic, notifying a channel nobody listens to — is a
//! defined no-op, so callers never have to track existence defensively.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicError {
    /// The topic id is already taken by a topic holding a different payload
    /// type, so an instance of the requested type cannot be produced.
    #[error("could not create topic `{id}` with payload `{requested}`: id is held by a topic with payload `{stored}`")]
    Construction {
        id: String,
        requested: &'static str,
        stored: &'static str,
    },
}
