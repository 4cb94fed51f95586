//! Integration tests for the scrape pipeline and the CLI boundary

mod scrape_tests;
