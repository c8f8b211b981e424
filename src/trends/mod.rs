//! Trending-topics collaborator
//!
//! Typed records for trending searches and their related news articles,
//! plus the provider trait the rest of the application depends on. The
//! concrete RSS-backed client lives in [`rss`].

mod rss;

pub use rss::RssTrendsClient;

use crate::TrendsError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

/// One news article associated with a trending topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsArticle {
    /// Article headline
    pub title: String,

    /// Absolute article URL
    pub url: String,

    /// Publishing outlet, when the feed names one
    pub source: Option<String>,
}

/// One trending search topic
#[derive(Debug, Clone)]
pub struct TrendingTopic {
    /// The trending search query
    pub keyword: String,

    /// Approximate search volume, when reported (e.g. 200000 for "200,000+")
    pub traffic: Option<u64>,

    /// When the trend started, when the feed carries a timestamp
    pub started: Option<DateTime<FixedOffset>>,

    /// Related news articles, in feed order
    pub articles: Vec<NewsArticle>,
}

/// Source of trending search topics for a geography
#[async_trait]
pub trait TrendsProvider: Send + Sync {
    /// Returns the currently trending topics for `geo` (e.g. "US")
    async fn trending_now(&self, geo: &str) -> Result<Vec<TrendingTopic>, TrendsError>;
}
