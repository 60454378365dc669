use serde::Deserialize;

/// Top-level configuration settings for the crate.
///
/// The lifecycle engine itself is purely in-memory; the only tunable it
/// carries is how chatty the tracing output should be.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub log: LogSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// Level name handed to `utils::logging::init` ("error" .. "trace").
    pub level: String,
}

/// Partial configuration loaded from files or environment.
///
/// Allows partial specification of settings. Missing values are filled from
/// `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub log: Option<PartialLogSettings>,
}

/// Partial logging settings with every field optional.
#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: LogSettings {
                level: "info".to_string(),
            },
        }
    }
}
