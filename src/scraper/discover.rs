//! One-hop subpage discovery
//!
//! Fetches a site's root page and collects every linked URL that is either
//! internal to the site or a recognized content-subpage slug. Discovered
//! subpages are fetched for text later but never scanned for further links.

use crate::config::ScraperConfig;
use crate::scraper::fetcher::{fetch_html, FetchOutcome};
use crate::url::{is_common_subpage, is_internal_url};
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Discovers the set of candidate subpages linked from `root`
///
/// A fetch failure is not an error at this layer: it is logged and an empty
/// set is returned, leaving the caller to crawl the root page alone.
///
/// # Filter
///
/// An anchor's href is kept when either
/// - it parses as an absolute URL on the same network location as `root`, or
/// - the raw href, trimmed of slashes and lowercased, is a configured
///   content-subpage slug (this is what catches relative links).
///
/// Kept hrefs are resolved against `root`; the set deduplicates.
pub async fn discover_subpages(
    client: &Client,
    root: &Url,
    config: &ScraperConfig,
) -> HashSet<Url> {
    let body = match fetch_html(client, root.as_str()).await {
        FetchOutcome::Success { body } => body,
        FetchOutcome::HttpError { status } => {
            tracing::warn!("Unable to fetch {} for discovery: HTTP {}", root, status);
            return HashSet::new();
        }
        FetchOutcome::NetworkError { error } => {
            tracing::warn!("Unable to fetch {} for discovery: {}", root, error);
            return HashSet::new();
        }
    };

    collect_subpage_links(&body, root, config)
}

/// Extracts and filters subpage links from already-fetched HTML
fn collect_subpage_links(html: &str, root: &Url, config: &ScraperConfig) -> HashSet<Url> {
    let document = Html::parse_document(html);
    let mut subpages = HashSet::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if is_internal_url(root, href)
                    || is_common_subpage(href, &config.common_subpages)
                {
                    if let Ok(resolved) = root.join(href) {
                        subpages.insert(resolved);
                    }
                }
            }
        }
    }

    subpages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn test_internal_absolute_link_kept() {
        let html = r#"<html><body><a href="https://example.com/page">Page</a></body></html>"#;
        let subpages = collect_subpage_links(html, &root(), &ScraperConfig::default());
        assert!(subpages.contains(&Url::parse("https://example.com/page").unwrap()));
    }

    #[test]
    fn test_external_link_dropped() {
        let html = r#"<html><body><a href="https://external.com/partner">Partner</a></body></html>"#;
        let subpages = collect_subpage_links(html, &root(), &ScraperConfig::default());
        assert!(subpages.is_empty());
    }

    #[test]
    fn test_relative_slug_resolved_and_kept() {
        let html = r#"<html><body><a href="/about-us">About</a></body></html>"#;
        let subpages = collect_subpage_links(html, &root(), &ScraperConfig::default());
        assert!(subpages.contains(&Url::parse("https://example.com/about-us").unwrap()));
    }

    #[test]
    fn test_relative_non_slug_dropped() {
        let html = r#"<html><body><a href="/some-random-page">Page</a></body></html>"#;
        let subpages = collect_subpage_links(html, &root(), &ScraperConfig::default());
        assert!(subpages.is_empty());
    }

    #[test]
    fn test_duplicate_hrefs_deduplicated() {
        let html = r#"<html><body>
            <a href="/pricing">One</a>
            <a href="/pricing">Two</a>
            <a href="https://example.com/pricing">Three</a>
        </body></html>"#;
        let subpages = collect_subpage_links(html, &root(), &ScraperConfig::default());
        assert_eq!(subpages.len(), 1);
    }

    #[test]
    fn test_mixed_internal_external_and_slug() {
        let html = r#"<html><body>
            <a href="/about-us">About</a>
            <a href="https://external.com/partner">Partner</a>
            <a href="https://example.com/custom">Custom</a>
        </body></html>"#;
        let subpages = collect_subpage_links(html, &root(), &ScraperConfig::default());
        assert_eq!(subpages.len(), 2);
        assert!(subpages.contains(&Url::parse("https://example.com/about-us").unwrap()));
        assert!(subpages.contains(&Url::parse("https://example.com/custom").unwrap()));
    }

    #[test]
    fn test_page_without_anchors() {
        let html = r#"<html><body><p>No links here</p></body></html>"#;
        let subpages = collect_subpage_links(html, &root(), &ScraperConfig::default());
        assert!(subpages.is_empty());
    }
}
