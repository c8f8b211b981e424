//! Trendscout: a trending-topics dashboard with site scraping and LLM article ideas
//!
//! This crate surfaces currently trending search topics, scrapes related
//! news/article content and whole marketing sites, and asks a language model
//! to suggest article ideas the existing coverage has not addressed.

pub mod config;
pub mod dashboard;
pub mod llm;
pub mod output;
pub mod prompts;
pub mod scraper;
pub mod trends;
pub mod url;

use thiserror::Error;

/// Main error type for trendscout operations
#[derive(Debug, Error)]
pub enum TrendScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid root URL '{url}': {source}")]
    InvalidRootUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Trends error: {0}")]
    Trends(#[from] TrendsError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors from the trending-topics provider
#[derive(Debug, Error)]
pub enum TrendsError {
    #[error("Failed to fetch trends feed from {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Trends feed at {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse trends feed: {0}")]
    Parse(String),
}

/// Errors from the language-model completion provider
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(&'static str),

    #[error("Completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Completion API returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for trendscout operations
pub type Result<T> = std::result::Result<T, TrendScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use scraper::{scrape_site, CrawlResult};
pub use trends::{NewsArticle, TrendingTopic, TrendsProvider};
pub use url::{extract_https_urls, is_common_subpage, is_internal_url};
