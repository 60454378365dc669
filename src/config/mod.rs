//! The `config` module handles loading and merging crate configuration.
//!
//! Configuration is read from an optional `config/default` file and from
//! environment variables (a local `.env` file is honored via `dotenvy`),
//! then merged over built-in defaults so every field always has a value.

mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{LogSettings, Settings};

/// Loads the configuration from the default file and environment variables
/// and merges it with default values.
pub fn load_config() -> Result<Settings, ConfigError> {
    // Pick up a local .env before reading the environment source.
    dotenvy::dotenv().ok();

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Deserialize what is available, then fill the gaps from defaults.
    let partial: PartialSettings = config.try_deserialize()?;
    let default = Settings::default();

    Ok(Settings {
        log: LogSettings {
            level: partial
                .log
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.log.level),
        },
    })
}
