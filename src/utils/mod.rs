//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `topicscope` crate.
//!
//! This module centralizes reusable components, such as the crate's error
//! type and the tracing setup, to promote consistency and reduce duplication.

pub mod error;
pub mod logging;

#[cfg(test)]
mod tests {
    use super::logging;

    #[test]
    fn logging_init_accepts_levels() {
        // Should not panic, and repeated calls must not either
        logging::init("info");
        logging::init("debug");
        logging::init("not-a-level");
    }
}
