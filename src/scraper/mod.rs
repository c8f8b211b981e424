//! Scraping subsystem
//!
//! This module contains the core scraping logic:
//! - Building the browser-identified HTTP client
//! - One-hop subpage discovery with internal/slug filtering
//! - Paragraph and content-tag text extraction
//! - Sequential site crawling with aggregate capping and crawl statistics

mod crawler;
mod discover;
mod fetcher;
mod page;

pub use crawler::{cap_text, scrape_site, CrawlResult};
pub use discover::discover_subpages;
pub use fetcher::{build_http_client, fetch_html, FetchOutcome};
pub use page::{
    extract_paragraph_text, extract_tag_text, get_page_text, has_skipped_extension,
    scrape_single_page,
};
