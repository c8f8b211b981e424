//! Site crawl orchestration
//!
//! Runs the one-hop crawl for a root URL: discover subpages, scrape each
//! candidate sequentially, aggregate the non-empty texts, and cap the
//! combined length. Individual page failures degrade to missing content and
//! never abort the crawl; only a malformed root URL is a hard failure.

use crate::config::ScraperConfig;
use crate::scraper::discover::discover_subpages;
use crate::scraper::page::scrape_single_page;
use crate::{Result, TrendScoutError};
use reqwest::Client;
use std::time::{Duration, Instant};
use url::Url;

/// Aggregate result of one crawl run
#[derive(Debug, Clone)]
pub struct CrawlResult {
    /// The root URL the crawl started from
    pub root_url: Url,

    /// Candidate pages found (discovered subpages plus the root)
    pub pages_found: usize,

    /// Pages that yielded non-empty text
    pub pages_scraped: usize,

    /// Combined text of all scraped pages, capped at the configured maximum
    pub text: String,

    /// Character length of the capped text
    pub total_chars: usize,

    /// Wall-clock duration of the whole crawl
    pub elapsed: Duration,
}

/// Crawls `root_url` and every one-hop subpage, returning the combined text
///
/// Page texts are joined with a single space, in candidate-set iteration
/// order (not stable across runs). The aggregate is truncated to
/// `max-text-length` characters; content beyond the cap is discarded.
///
/// # Errors
///
/// Only a root URL that does not parse fails the crawl. Discovery and
/// per-page fetch failures are logged and degrade to less (or no) content.
pub async fn scrape_site(
    client: &Client,
    root_url: &str,
    config: &ScraperConfig,
) -> Result<CrawlResult> {
    let root = Url::parse(root_url).map_err(|source| TrendScoutError::InvalidRootUrl {
        url: root_url.to_string(),
        source,
    })?;

    let start = Instant::now();

    let mut candidates = discover_subpages(client, &root, config).await;
    candidates.insert(root.clone());
    let pages_found = candidates.len();
    tracing::info!("Found {} total pages to scrape", pages_found);

    let mut collected = Vec::new();
    let mut pages_scraped = 0;

    for page in &candidates {
        let text = scrape_single_page(client, page.as_str(), config).await;
        if !text.is_empty() {
            tracing::info!(
                "Successfully scraped {} chars from {}",
                text.chars().count(),
                page
            );
            pages_scraped += 1;
            collected.push(text);
        }
    }

    let text = cap_text(collected.join(" "), config.max_text_length);
    let total_chars = text.chars().count();
    let elapsed = start.elapsed();

    tracing::info!(
        "Finished scraping {} total chars from {}/{} pages in {:.2} seconds",
        total_chars,
        pages_scraped,
        pages_found,
        elapsed.as_secs_f64()
    );

    Ok(CrawlResult {
        root_url: root,
        pages_found,
        pages_scraped,
        text,
        total_chars,
        elapsed,
    })
}

/// Truncates `text` to at most `max_chars` characters
///
/// The cap counts characters, not bytes, so multi-byte content is never cut
/// mid-character.
pub fn cap_text(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => {
            let mut capped = text;
            capped.truncate(byte_index);
            capped
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_text_shorter_than_limit() {
        assert_eq!(cap_text("hello".to_string(), 10), "hello");
    }

    #[test]
    fn test_cap_text_exact_limit() {
        assert_eq!(cap_text("hello".to_string(), 5), "hello");
    }

    #[test]
    fn test_cap_text_truncates_excess() {
        assert_eq!(cap_text("hello world".to_string(), 5), "hello");
    }

    #[test]
    fn test_cap_text_counts_characters_not_bytes() {
        // Four three-byte characters; a byte-based cap would split one
        assert_eq!(cap_text("日本語文".to_string(), 2), "日本");
    }

    #[test]
    fn test_cap_text_zero() {
        assert_eq!(cap_text("hello".to_string(), 0), "");
    }
}
