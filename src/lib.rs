//! Pagelift: a single-page fetch-and-extract tool
//!
//! This crate fetches one web page over HTTP(S), extracts its title and
//! visible body text, and produces a structured [`record::ResultRecord`]
//! with status and timestamp metadata. It is a building block for batch
//! or orchestrated scraping workflows: a caller supplies a URL and gets
//! back one normalized JSON record per invocation.

pub mod config;
pub mod output;
pub mod record;
pub mod scrape;

use thiserror::Error;

/// Main error type for pagelift operations
///
/// The scrape pipeline itself never surfaces these to callers: fetch and
/// parse failures are captured inside the returned record. This type covers
/// the process boundary (configuration loading, output persistence).
#[derive(Debug, Error)]
pub enum PageliftError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required setting '{0}' is not set. Check your .env file")]
    MissingSetting(String),

    #[error("Invalid value for setting '{key}': {message}")]
    InvalidSetting { key: String, message: String },
}

/// Result type alias for pagelift operations
pub type Result<T> = std::result::Result<T, PageliftError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::FetchConfig;
pub use record::{ResultRecord, Status};
pub use scrape::{scrape, scrape_with_config};
