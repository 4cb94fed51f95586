//! Integration tests for the fetch-and-extract pipeline
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full scrape cycle end-to-end, including retry exhaustion and redirect
//! handling.

use pagelift::config::FetchConfig;
use pagelift::record::Status;
use pagelift::scrape::scrape_with_config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A test config with no backoff sleep so retry tests run instantly
fn fast_config(retries: u32) -> FetchConfig {
    FetchConfig::new(retries, 0.0, 5)
}

#[tokio::test]
async fn test_scrape_success_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Hello</title></head><body>  Hi   there </body></html>",
        ))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let record = scrape_with_config(&url, &fast_config(2)).await;

    assert_eq!(record.status, Status::Success);
    assert_eq!(record.url, url);
    assert_eq!(record.title.as_deref(), Some("Hello"));
    assert_eq!(record.body_text.as_deref(), Some("Hi there"));
    assert!(record.error.is_none());
    assert!(record
        .scraped_at
        .parse::<chrono::DateTime<chrono::Utc>>()
        .is_ok());
}

#[tokio::test]
async fn test_persistent_503_exhausts_retries() {
    let mock_server = MockServer::start().await;

    // With retries = 2, the server must see exactly 3 attempts.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let record = scrape_with_config(&url, &fast_config(2)).await;

    assert_eq!(record.status, Status::Failed);
    let error = record.error.expect("failed record should carry an error");
    assert!(error.contains("503"), "error should mention the status: {}", error);
    assert!(record.title.is_none());
    assert!(record.body_text.is_none());
}

#[tokio::test]
async fn test_404_fails_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing", mock_server.uri());
    let record = scrape_with_config(&url, &fast_config(2)).await;

    assert_eq!(record.status, Status::Failed);
    assert!(record.error.unwrap().contains("404"));
}

#[tokio::test]
async fn test_transient_503_recovers_on_retry() {
    let mock_server = MockServer::start().await;

    // First attempt fails, second succeeds.
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Recovered</title></head><body>ok</body></html>",
        ))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let record = scrape_with_config(&url, &fast_config(2)).await;

    assert_eq!(record.status, Status::Success);
    assert_eq!(record.title.as_deref(), Some("Recovered"));
}

#[tokio::test]
async fn test_missing_title_uses_placeholder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>Just some content</body></html>"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let record = scrape_with_config(&url, &fast_config(0)).await;

    assert_eq!(record.status, Status::Success);
    assert_eq!(record.title.as_deref(), Some("(no title)"));
    assert_eq!(record.body_text.as_deref(), Some("Just some content"));
}

#[tokio::test]
async fn test_empty_body_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>Empty</title></head><body>  </body></html>"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let record = scrape_with_config(&url, &fast_config(0)).await;

    assert_eq!(record.status, Status::Success);
    assert_eq!(record.body_text.as_deref(), Some(""));
}

#[tokio::test]
async fn test_redirect_keeps_requested_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/start"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", format!("{}/final", mock_server.uri()).as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/final"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Destination</title></head><body>Landed</body></html>",
        ))
        .mount(&mock_server)
        .await;

    let url = format!("{}/start", mock_server.uri());
    let record = scrape_with_config(&url, &fast_config(0)).await;

    assert_eq!(record.status, Status::Success);
    // The record keeps the originally requested URL, not the redirect target.
    assert_eq!(record.url, url);
    assert_eq!(record.title.as_deref(), Some("Destination"));
}

#[tokio::test]
async fn test_non_html_content_is_not_special_cased() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("plain text payload")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/data", mock_server.uri());
    let record = scrape_with_config(&url, &fast_config(0)).await;

    assert_eq!(record.status, Status::Success);
    assert_eq!(record.title.as_deref(), Some("(no title)"));
    assert_eq!(record.body_text.as_deref(), Some("plain text payload"));
}

#[tokio::test]
async fn test_connection_refused_is_captured() {
    // Start a server to grab a free port, then drop it so the port refuses
    // connections.
    let url = {
        let mock_server = MockServer::start().await;
        format!("{}/", mock_server.uri())
    };

    let record = scrape_with_config(&url, &fast_config(0)).await;

    assert_eq!(record.status, Status::Failed);
    let error = record.error.expect("failed record should carry an error");
    assert!(!error.is_empty());
    assert_eq!(record.url, url);
}

#[tokio::test]
async fn test_scrape_is_idempotent_against_static_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><head><title>Static</title></head><body>Same every time</body></html>",
        ))
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let first = scrape_with_config(&url, &fast_config(0)).await;
    let second = scrape_with_config(&url, &fast_config(0)).await;

    assert_eq!(first.status, Status::Success);
    assert_eq!(first.title, second.title);
    assert_eq!(first.body_text, second.body_text);
}
