//! Single-page text extraction
//!
//! Fetches one URL and reduces its HTML to plain text. The primary extractor
//! concatenates `<p>` contents; a coarser variant collects the text of the
//! configured content-bearing tags. Both exclude `<script>` and `<style>`
//! subtrees entirely.

use crate::config::ScraperConfig;
use crate::scraper::fetcher::{fetch_html, FetchOutcome};
use reqwest::Client;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Returns true if the URL ends with one of the configured binary extensions
///
/// The check is case-insensitive on the whole URL string. Matching URLs are
/// never fetched.
pub fn has_skipped_extension(url: &str, extensions: &[String]) -> bool {
    let lower = url.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&ext.to_lowercase()))
}

/// Fetches `url` and extracts its paragraph text
///
/// # Returns
///
/// * `Some("")` - the URL has a skipped binary extension; no request is made
/// * `Some(text)` - paragraph text of the fetched page (may be empty)
/// * `None` - the fetch failed; the caller logs and treats it as no content
pub async fn get_page_text(client: &Client, url: &str, config: &ScraperConfig) -> Option<String> {
    if has_skipped_extension(url, &config.skip_extensions) {
        tracing::info!("Skipped URL with excluded extension: {}", url);
        return Some(String::new());
    }

    match fetch_html(client, url).await {
        FetchOutcome::Success { body } => Some(extract_paragraph_text(&body)),
        FetchOutcome::HttpError { status } => {
            tracing::warn!("Unable to fetch {}: HTTP {}", url, status);
            None
        }
        FetchOutcome::NetworkError { error } => {
            tracing::warn!("Unable to fetch {}: {}", url, error);
            None
        }
    }
}

/// Scrapes one page, coercing fetch failures to empty content
pub async fn scrape_single_page(client: &Client, url: &str, config: &ScraperConfig) -> String {
    get_page_text(client, url, config).await.unwrap_or_default()
}

/// Extracts the text of every `<p>` element in `html`
///
/// Paragraph texts are trimmed and joined with newlines. Text inside
/// `<script>` or `<style>` never appears in the output, even when nested
/// inside a paragraph.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut paragraphs = Vec::new();

    if let Ok(selector) = Selector::parse("p") {
        for element in document.select(&selector) {
            paragraphs.push(element_text(element).trim().to_string());
        }
    }

    paragraphs.join("\n")
}

/// Extracts the text of the given content-bearing tags
///
/// Coarser alternative to [`extract_paragraph_text`] for pages that carry
/// their copy outside paragraph elements. Nested tags from the list yield
/// their text once per match, so overlapping containers can repeat content.
pub fn extract_tag_text(html: &str, tags: &[String]) -> String {
    let document = Html::parse_document(html);
    let mut blocks = Vec::new();

    for tag in tags {
        if let Ok(selector) = Selector::parse(tag) {
            for element in document.select(&selector) {
                let text = element_text(element).trim().to_string();
                if !text.is_empty() {
                    blocks.push(text);
                }
            }
        }
    }

    blocks.join("\n")
}

/// Collects the text nodes under `element`, excluding script and style
/// subtrees
fn element_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();

    for node in element.descendants() {
        if let Node::Text(chunk) = node.value() {
            let excluded = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .map(|el| matches!(el.name(), "script" | "style"))
                    .unwrap_or(false)
            });
            if !excluded {
                text.push_str(chunk);
            }
        }
    }

    text
}
