//! Environment-backed settings
//!
//! Settings come from the process environment, optionally seeded from a
//! `.env` file at startup. The environment is read once into an explicit
//! config value; nothing downstream touches globals.

use crate::config::types::FetchConfig;
use crate::{ConfigError, ConfigResult};

/// Environment variable overriding the retry count
pub const ENV_RETRIES: &str = "PAGELIFT_RETRIES";

/// Environment variable overriding the backoff base (seconds, float)
pub const ENV_BACKOFF_BASE: &str = "PAGELIFT_BACKOFF_BASE";

/// Environment variable overriding the per-attempt timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "PAGELIFT_TIMEOUT_SECS";

/// Loads a `.env` file from the current directory into the process
/// environment, if one exists. Existing variables are not overwritten.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!("Loaded environment from {}", path.display());
    }
}

/// Fetches a required setting from the environment
///
/// # Errors
///
/// Returns [`ConfigError::MissingSetting`] when the variable is unset or
/// empty.
pub fn get_setting(key: &str) -> ConfigResult<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingSetting(key.to_string())),
    }
}

/// Fetches an optional setting, returning `None` when unset or empty
pub fn get_optional_setting(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl FetchConfig {
    /// Builds a config from the environment, falling back to defaults for
    /// any variable that is unset
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSetting`] when a variable is present
    /// but unparseable. This is a pre-flight error and aborts before any
    /// fetch is attempted.
    pub fn from_env() -> ConfigResult<Self> {
        let defaults = FetchConfig::default();

        let retries = parse_setting(ENV_RETRIES)?.unwrap_or(defaults.retries);
        let backoff_base = parse_setting(ENV_BACKOFF_BASE)?.unwrap_or(defaults.backoff_base);
        let timeout_secs = parse_setting(ENV_TIMEOUT_SECS)?.unwrap_or(defaults.timeout.as_secs());

        Ok(FetchConfig::new(retries, backoff_base, timeout_secs))
    }
}

/// Parses an optional environment variable into `T`
fn parse_setting<T: std::str::FromStr>(key: &str) -> ConfigResult<Option<T>> {
    match get_optional_setting(key) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidSetting {
                key: key.to_string(),
                message: format!("cannot parse '{}'", raw),
            }),
        None => Ok(None),
    }
}
