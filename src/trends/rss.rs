//! RSS-backed trending-topics client
//!
//! Fetches the trending-searches RSS feed and maps its items onto the typed
//! trend records. The feed is a small, flat XML document; fields are pulled
//! out with a tag-text scan (the same delimited-substring technique the URL
//! extractor uses on anchor fragments), handling CDATA sections and the
//! standard XML entities.

use crate::trends::{NewsArticle, TrendingTopic, TrendsProvider};
use crate::TrendsError;
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;

/// Trending-topics provider backed by the public RSS feed
pub struct RssTrendsClient {
    client: Client,
    feed_url: String,
}

impl RssTrendsClient {
    /// Creates a client against the given feed base URL
    pub fn new(client: Client, feed_url: impl Into<String>) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
        }
    }
}

#[async_trait]
impl TrendsProvider for RssTrendsClient {
    async fn trending_now(&self, geo: &str) -> Result<Vec<TrendingTopic>, TrendsError> {
        let url = format!("{}?geo={}", self.feed_url, geo);
        tracing::info!("Fetching trending searches for geo: {}", geo);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| TrendsError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrendsError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| TrendsError::Http {
            url: url.clone(),
            source,
        })?;

        parse_feed(&body)
    }
}

/// Parses an RSS feed body into trend records
///
/// Items without a title are dropped with a warning; a feed without items
/// parses to an empty list.
pub fn parse_feed(body: &str) -> Result<Vec<TrendingTopic>, TrendsError> {
    if !body.contains("<rss") {
        return Err(TrendsError::Parse(
            "response is not an RSS document".to_string(),
        ));
    }

    let mut topics = Vec::new();

    for item in blocks(body, "<item>", "</item>") {
        let keyword = match tag_text(item, "title") {
            Some(k) if !k.is_empty() => k,
            _ => {
                tracing::warn!("Dropping feed item without a title");
                continue;
            }
        };

        let traffic = tag_text(item, "ht:approx_traffic").and_then(|t| parse_traffic(&t));

        let started = tag_text(item, "pubDate")
            .and_then(|d| DateTime::parse_from_rfc2822(&d).ok());

        let mut articles = Vec::new();
        for news in blocks(item, "<ht:news_item>", "</ht:news_item>") {
            let url = match tag_text(news, "ht:news_item_url") {
                Some(u) if !u.is_empty() => u,
                _ => continue,
            };
            articles.push(NewsArticle {
                title: tag_text(news, "ht:news_item_title").unwrap_or_default(),
                url,
                source: tag_text(news, "ht:news_item_source"),
            });
        }

        topics.push(TrendingTopic {
            keyword,
            traffic,
            started,
            articles,
        });
    }

    Ok(topics)
}

/// Returns every substring delimited by `open`..`close`, in document order
fn blocks<'a>(text: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        match after_open.find(close) {
            Some(end) => {
                out.push(&after_open[..end]);
                rest = &after_open[end + close.len()..];
            }
            None => break,
        }
    }

    out
}

/// Returns the trimmed text content of the first `<tag>…</tag>` in `block`
fn tag_text(block: &str, tag: &str) -> Option<String> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let start = block.find(&open)? + open.len();
    let end = block[start..].find(&close)? + start;

    let mut content = block[start..end].trim();
    if let Some(inner) = content
        .strip_prefix("<![CDATA[")
        .and_then(|c| c.strip_suffix("]]>"))
    {
        content = inner.trim();
    }

    Some(unescape(content))
}

/// Resolves the five standard XML entities
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Parses traffic strings like "200,000+" into an approximate count
fn parse_traffic(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
