//! The `client` module defines the per-component side of the lifecycle
//! contract.
//!
//! It provides the `ClientHandle` struct: a token tied to one UI component
//! that survives reconfiguration and fires a one-shot closed-notification to
//! every listening host when the component is permanently destroyed.

pub mod handle;

pub use handle::{ClientHandle, ClientId};

#[cfg(test)]
mod tests;
