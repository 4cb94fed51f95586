//! HTML extraction
//!
//! Pulls the title and visible body text out of fetched markup. The parser
//! is tolerant: unclosed tags, missing doctypes, and non-HTML payloads all
//! degrade to best-effort text rather than failing, so extraction never
//! produces an error.

use crate::record::NO_TITLE_PLACEHOLDER;
use scraper::{Html, Selector};

/// Title and body text extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Trimmed `<title>` text, or `"(no title)"` when absent
    pub title: String,

    /// Visible text with runs of whitespace collapsed to single spaces
    pub body_text: String,
}

/// Extracts the title and visible body text from HTML content
///
/// The title is the first `<title>` element's text, trimmed. Body text is
/// every text node under `<body>` joined by single spaces with whitespace
/// collapsed; when the document has no `<body>` element the same rule is
/// applied to the whole document instead.
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    let title = extract_title(&document).unwrap_or_else(|| NO_TITLE_PLACEHOLDER.to_string());
    let body_text = extract_body_text(&document);

    ExtractedPage { title, body_text }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts visible text, preferring the `<body>` element
fn extract_body_text(document: &Html) -> String {
    if let Ok(body_selector) = Selector::parse("body") {
        if let Some(body) = document.select(&body_selector).next() {
            return collapse_whitespace(body.text());
        }
    }

    tracing::warn!("No <body> element found, extracting text from the whole document");
    collapse_whitespace(document.root_element().text())
}

/// Joins text fragments with single spaces, collapsing runs of whitespace
fn collapse_whitespace<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    fragments
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
