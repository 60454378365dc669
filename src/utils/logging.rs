//! Tracing setup for the crate.

use std::str::FromStr;

use tracing::Level;

/// Initialize tracing with the given level name ("error", "warn", "info",
/// "debug", "trace"). Unknown names fall back to `info`.
///
/// Uses `try_init` so tests and embedding applications can call this more
/// than once without panicking.
pub fn init(default_level: &str) {
    let lvl = Level::from_str(default_level).unwrap_or(Level::INFO);

    let _ = tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_target(false)
        .try_init();
}

/// Initialize tracing from the loaded configuration (`log.level`), falling
/// back to the defaults when no configuration can be read.
pub fn init_from_config() {
    let level = crate::config::load_config()
        .map(|settings| settings.log.level)
        .unwrap_or_else(|_| "info".to_string());

    init(&level);
}
