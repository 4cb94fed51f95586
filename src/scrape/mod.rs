//! The fetch-and-extract pipeline
//!
//! This module contains the core scrape logic:
//! - HTTP fetching with retry and backoff
//! - Title and body text extraction
//! - Normalizing every outcome into a [`ResultRecord`]

mod extract;
mod fetcher;

pub use extract::{extract_page, ExtractedPage};
pub use fetcher::{build_http_client, fetch_page, FetchError};

use crate::config::FetchConfig;
use crate::record::ResultRecord;
use url::Url;

/// Fetches a URL and extracts its title and body text, using the default
/// retry/timeout configuration
///
/// See [`scrape_with_config`].
pub async fn scrape(url: &str) -> ResultRecord {
    scrape_with_config(url, &FetchConfig::default()).await
}

/// Fetches a URL and extracts its title and body text
///
/// Performs exactly one scrape: build a client, GET the page (with the
/// configured bounded retry), parse the markup, and stamp the result. This
/// function never fails — every error along the way (malformed URL, client
/// construction, transport failure, terminal HTTP status) is captured as a
/// `failed` record with a human-readable cause. The `url` field always
/// holds the originally requested URL, even after redirects.
///
/// # Arguments
///
/// * `url` - The URL to scrape
/// * `config` - Retry and timeout configuration
///
/// # Returns
///
/// A [`ResultRecord`] with `status == Success` and the extracted fields,
/// or `status == Failed` and an error description.
pub async fn scrape_with_config(url: &str, config: &FetchConfig) -> ResultRecord {
    tracing::info!("Fetching {}", url);

    let parsed_url = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::error!("Invalid URL {}: {}", url, e);
            return ResultRecord::failure(url, format!("invalid URL: {}", e));
        }
    };

    let client = match build_http_client(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return ResultRecord::failure(url, e.to_string());
        }
    };

    let body = match fetch_page(&client, config, &parsed_url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            return ResultRecord::failure(url, e.to_string());
        }
    };

    let page = extract_page(&body);
    tracing::info!(
        "Extracted {} characters from '{}'",
        page.body_text.len(),
        page.title
    );

    ResultRecord::success(url, page.title, page.body_text)
}
