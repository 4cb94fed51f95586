//! The scrape result record
//!
//! One [`ResultRecord`] is produced per invocation. It is the sole domain
//! entity: constructed once after the fetch/parse attempt completes, then
//! serialized verbatim and never mutated.

use chrono::Utc;
use serde::Serialize;

/// Placeholder title used when the page has no `<title>` element
pub const NO_TITLE_PLACEHOLDER: &str = "(no title)";

/// Outcome of a scrape attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failed,
}

/// The outcome of one scrape attempt
///
/// Exactly one of the status-specific field sets is present: `title` and
/// `body_text` on success, `error` on failure. The constructors enforce
/// this; absent fields are omitted from the serialized JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRecord {
    /// The originally requested URL (not the post-redirect location)
    pub url: String,

    /// Page title, success only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whitespace-collapsed visible body text, success only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,

    pub status: Status,

    /// Human-readable failure cause, failure only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// UTC completion time, ISO-8601 with second precision
    pub scraped_at: String,
}

impl ResultRecord {
    /// Creates a success record, stamped with the current time
    pub fn success(url: &str, title: String, body_text: String) -> Self {
        ResultRecord {
            url: url.to_string(),
            title: Some(title),
            body_text: Some(body_text),
            status: Status::Success,
            error: None,
            scraped_at: now_iso(),
        }
    }

    /// Creates a failure record, stamped with the current time
    pub fn failure(url: &str, error: String) -> Self {
        ResultRecord {
            url: url.to_string(),
            title: None,
            body_text: None,
            status: Status::Failed,
            error: Some(error),
            scraped_at: now_iso(),
        }
    }
}

/// Returns the current UTC time as an ISO 8601 string with second precision
fn now_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
