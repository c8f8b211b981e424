//! HTTP fetcher for the scraping subsystem
//!
//! Builds the browser-identified HTTP client and performs single GET
//! requests, classifying failures so callers can degrade to empty content
//! instead of propagating errors.

use crate::config::ScraperConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of fetching one page
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched the page body
    Success { body: String },

    /// The server answered with a non-success status
    HttpError { status: u16 },

    /// The request never completed (timeout, connection refused, DNS, ...)
    NetworkError { error: String },
}

/// Builds the HTTP client used for all page requests
///
/// The client identifies itself with the configured browser-like User-Agent;
/// redirects follow the library default policy.
pub fn build_http_client(config: &ScraperConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the classified outcome
///
/// There are no retries at this layer: a failed request is reported once and
/// the caller decides what "no content" means for it.
pub async fn fetch_html(client: &Client, url: &str) -> FetchOutcome {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                return FetchOutcome::HttpError {
                    status: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { body },
                Err(e) => FetchOutcome::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };
            FetchOutcome::NetworkError { error }
        }
    }
}
