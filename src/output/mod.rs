//! Output persistence
//!
//! Serializes a [`ResultRecord`] as pretty-printed UTF-8 JSON (2-space
//! indentation, non-ASCII left unescaped) and writes it to disk, creating
//! parent directories as needed. Failed records are written the same way
//! as successful ones so downstream tooling can always expect a file.

use crate::record::ResultRecord;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output persistence errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

/// Returns the default output path: `outputs/scraped_<YYYYMMDD_HHMMSS>.json`
///
/// The timestamp uses local time, matching the filenames a human operator
/// sees alongside their shell clock.
pub fn default_output_path() -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from("outputs").join(format!("scraped_{}.json", timestamp))
}

/// Writes a record to the given path as pretty-printed JSON
///
/// Parent directories are created if missing. The record is written
/// verbatim; this function never inspects or alters it.
///
/// # Arguments
///
/// * `record` - The record to persist
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the record
/// * `Err(OutputError)` - Serialization or filesystem failure
pub fn write_record(record: &ResultRecord, path: &Path) -> OutputResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;

    Ok(())
}
