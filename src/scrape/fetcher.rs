//! HTTP fetcher implementation
//!
//! This module handles the network half of the pipeline:
//! - Building an HTTP client with a fixed identifying user agent
//! - GET requests with bounded retry and exponential backoff
//! - Classification of transient vs. terminal failures

use crate::config::FetchConfig;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

/// Fixed user agent sent on every request so remote servers can attribute
/// and rate-limit the traffic
const USER_AGENT: &str = concat!(
    "pagelift/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/pagelift/pagelift)"
);

/// HTTP statuses treated as transient and eligible for retry
const RETRYABLE_STATUSES: [StatusCode; 5] = [
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// A fetch failure after all attempts are exhausted
///
/// The pipeline only ever records the `Display` form of this error; the
/// variant split exists for logging and tests, not for the output record.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("server returned HTTP {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("request failed for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },
}

/// Builds an HTTP client from the given retry/timeout configuration
///
/// The client carries a fixed descriptive user agent and the per-attempt
/// timeout; redirects are followed transparently. Construction performs no
/// network IO.
///
/// # Arguments
///
/// * `config` - Retry and timeout configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with bounded retry and returns the response body
///
/// Issues GET requests only, so retrying is safe. A request is retried
/// when it fails at the transport level with a connect error or timeout,
/// or when the response status is one of 429/500/502/503/504. Anything
/// else fails immediately. The sleep before retry `n` is
/// `backoff_base * 2^n` seconds.
///
/// Worst-case latency is `timeout * (retries + 1)` plus the backoff
/// sleeps.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - Retry configuration (the client's timeout already applies)
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - Decoded response body of a 2xx response
/// * `Err(FetchError)` - Terminal failure after all attempts
pub async fn fetch_page(client: &Client, config: &FetchConfig, url: &Url) -> Result<String, FetchError> {
    let mut attempt: u32 = 0;

    loop {
        let (error, retryable) = match client.get(url.clone()).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return response
                        .text()
                        .await
                        .map_err(|source| FetchError::Transport {
                            url: url.to_string(),
                            source,
                        });
                }
                (
                    FetchError::Status {
                        url: url.to_string(),
                        status,
                    },
                    is_retryable_status(status),
                )
            }
            Err(source) => {
                let retryable = is_retryable_error(&source);
                (
                    FetchError::Transport {
                        url: url.to_string(),
                        source,
                    },
                    retryable,
                )
            }
        };

        if !retryable || attempt >= config.retries {
            return Err(error);
        }

        let delay = config.backoff_delay(attempt);
        tracing::warn!(
            "Attempt {}/{} failed ({}), retrying in {:.1}s",
            attempt + 1,
            config.retries + 1,
            error,
            delay.as_secs_f64()
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

/// Returns true when a response status signals a transient condition
fn is_retryable_status(status: StatusCode) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}

/// Returns true when a transport error is worth retrying
///
/// Connection failures and timeouts may succeed on a later attempt;
/// everything else (TLS handshake failures, decode errors, request
/// construction errors) fails immediately.
fn is_retryable_error(error: &reqwest::Error) -> bool {
    error.is_timeout() || error.is_connect()
}
