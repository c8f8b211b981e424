//! Dashboard assembly and the article-ideas pipeline
//!
//! Turns typed trend records into displayable table rows, and runs the
//! end-to-end idea-generation flow: extract article URLs from a row's link
//! fragment, scrape each article, and ask the completion provider for
//! uncovered article ideas.

use crate::config::Config;
use crate::llm::CompletionProvider;
use crate::prompts::article_ideas_prompt;
use crate::scraper::{cap_text, scrape_single_page};
use crate::trends::{NewsArticle, TrendingTopic, TrendsProvider};
use crate::url::{dedup_preserving_order, extract_https_urls};
use crate::Result;
use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use std::time::Duration;

/// One row of the trending-topics table
#[derive(Debug, Clone)]
pub struct TrendRow {
    /// The trending search query
    pub keyword: String,

    /// Display volume with thousands separators, or "N/A"
    pub volume: String,

    /// Display timeframe ("<started> - now", or "N/A")
    pub timeframe: String,

    /// Related article links as an HTML anchor fragment
    pub links_html: String,

    /// The same links as plain URLs, for terminal display
    pub article_urls: Vec<String>,
}

/// Fetches trending topics and shapes them into dashboard rows
pub async fn fetch_trend_rows<P: TrendsProvider>(
    provider: &P,
    config: &Config,
) -> Result<Vec<TrendRow>> {
    let topics = provider.trending_now(&config.trends.geo).await?;
    Ok(build_trend_rows(
        topics,
        config.trends.max_trends,
        config.trends.max_articles_per_trend,
    ))
}

/// Builds at most `max_trends` rows, keeping `max_articles` links per row
pub fn build_trend_rows(
    topics: Vec<TrendingTopic>,
    max_trends: usize,
    max_articles: usize,
) -> Vec<TrendRow> {
    topics
        .into_iter()
        .take(max_trends)
        .map(|topic| TrendRow {
            volume: format_volume(topic.traffic),
            timeframe: format_timeframe(topic.started),
            links_html: links_fragment(&topic.articles, max_articles),
            article_urls: topic
                .articles
                .iter()
                .take(max_articles)
                .map(|a| a.url.clone())
                .collect(),
            keyword: topic.keyword,
        })
        .collect()
}

/// Generates article ideas from a text blob of related-article links
///
/// URLs are extracted from the blob (first occurrence wins), each article
/// page is scraped sequentially with the configured inter-request delay, the
/// combined text is capped, and the completion provider is asked for ideas.
///
/// Returns `Ok(None)` when the blob contains no URLs or no article yielded
/// text: nothing to report, not a failure.
pub async fn generate_article_ideas<L: CompletionProvider>(
    llm: &L,
    client: &Client,
    links_blob: &str,
    config: &Config,
) -> Result<Option<String>> {
    let urls = dedup_preserving_order(extract_https_urls(links_blob));
    if urls.is_empty() {
        tracing::info!("No article URLs found in input");
        return Ok(None);
    }

    generate_ideas_from_urls(llm, client, &urls, config).await
}

/// Generates article ideas from an explicit list of article URLs
///
/// Each page is scraped sequentially with the configured inter-request
/// delay. Returns `Ok(None)` when no article yielded text.
pub async fn generate_ideas_from_urls<L: CompletionProvider>(
    llm: &L,
    client: &Client,
    urls: &[String],
    config: &Config,
) -> Result<Option<String>> {
    tracing::info!("Scraping {} article pages", urls.len());
    let delay = Duration::from_millis(config.scraper.article_delay_ms);
    let mut collected = Vec::new();

    for url in urls {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let text = scrape_single_page(client, url, &config.scraper).await;
        if !text.is_empty() {
            collected.push(text);
        }
    }

    if collected.is_empty() {
        tracing::info!("No article yielded any text");
        return Ok(None);
    }

    let combined = cap_text(collected.join(" "), config.scraper.max_text_length);
    let prompt = article_ideas_prompt(&combined);
    let ideas = llm.complete(&prompt).await?;

    Ok(Some(ideas))
}

/// Formats a search volume with thousands separators
fn format_volume(traffic: Option<u64>) -> String {
    match traffic {
        Some(n) => {
            let digits = n.to_string();
            let mut out = String::new();
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    out.push(',');
                }
                out.push(c);
            }
            out
        }
        None => "N/A".to_string(),
    }
}

/// Formats the trend start as a display timeframe
fn format_timeframe(started: Option<DateTime<FixedOffset>>) -> String {
    match started {
        Some(dt) => format!("{} - now", dt.format("%Y-%m-%d %H:%M:%S")),
        None => "N/A".to_string(),
    }
}

/// Renders article links as the anchor fragment shown in the table
fn links_fragment(articles: &[NewsArticle], max_articles: usize) -> String {
    let links: Vec<String> = articles
        .iter()
        .take(max_articles)
        .map(|a| format!("<a href='{}' target='_blank'>{}</a>", a.url, a.url))
        .collect();

    if links.is_empty() {
        "No articles".to_string()
    } else {
        links.join("<br>")
    }
}
