//! Configuration module for pagelift
//!
//! Retry/timeout settings for the HTTP client, with optional overrides
//! loaded from the process environment (seeded from a `.env` file at
//! startup).
//!
//! # Example
//!
//! ```no_run
//! use pagelift::config::FetchConfig;
//!
//! pagelift::config::load_dotenv();
//! let config = FetchConfig::from_env().unwrap();
//! println!("Retries: {}", config.retries);
//! ```

mod env;
mod types;

// Re-export types
pub use types::{
    FetchConfig, DEFAULT_BACKOFF_BASE, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS, MAX_BACKOFF_SECS,
};

// Re-export environment helpers
pub use env::{
    get_optional_setting, get_setting, load_dotenv, ENV_BACKOFF_BASE, ENV_RETRIES,
    ENV_TIMEOUT_SECS,
};
