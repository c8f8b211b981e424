use serde::Deserialize;

/// Main configuration structure for trendscout
///
/// Every section and field carries a default, so the application runs
/// without a config file at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub trends: TrendsConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent header sent with every page request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum total character length retained for a crawl's combined text
    #[serde(rename = "max-text-length", default = "default_max_text_length")]
    pub max_text_length: usize,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Delay between news-article requests (milliseconds)
    #[serde(rename = "article-delay-ms", default = "default_article_delay_ms")]
    pub article_delay_ms: u64,

    /// File extensions that are never fetched (binary content)
    #[serde(rename = "skip-extensions", default = "default_skip_extensions")]
    pub skip_extensions: Vec<String>,

    /// Path slugs recognized as typical content subpages
    #[serde(rename = "common-subpages", default = "default_common_subpages")]
    pub common_subpages: Vec<String>,

    /// Content-bearing tags used by the tag-based extraction variant
    #[serde(rename = "content-tags", default = "default_content_tags")]
    pub content_tags: Vec<String>,
}

/// Trending-topics provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TrendsConfig {
    /// Base URL of the trending-searches RSS feed
    #[serde(rename = "feed-url", default = "default_feed_url")]
    pub feed_url: String,

    /// Geographic region code (e.g. "US", "GB")
    #[serde(default = "default_geo")]
    pub geo: String,

    /// Number of trending topics shown on the dashboard
    #[serde(rename = "max-trends", default = "default_max_trends")]
    pub max_trends: usize,

    /// Maximum news articles kept per trend
    #[serde(
        rename = "max-articles-per-trend",
        default = "default_max_articles_per_trend"
    )]
    pub max_articles_per_trend: usize,
}

/// Language-model completion configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API
    #[serde(rename = "api-base", default = "default_api_base")]
    pub api_base: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path where generated article ideas are written
    #[serde(rename = "ideas-path", default = "default_ideas_path")]
    pub ideas_path: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            max_text_length: default_max_text_length(),
            request_timeout_secs: default_request_timeout_secs(),
            article_delay_ms: default_article_delay_ms(),
            skip_extensions: default_skip_extensions(),
            common_subpages: default_common_subpages(),
            content_tags: default_content_tags(),
        }
    }
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            geo: default_geo(),
            max_trends: default_max_trends(),
            max_articles_per_trend: default_max_articles_per_trend(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            ideas_path: default_ideas_path(),
        }
    }
}

fn default_user_agent() -> String {
    // A browser-like UA avoids the most naive bot blocking
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/93.0.4577.63 Safari/537.36"
        .to_string()
}

fn default_max_text_length() -> usize {
    500_000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_article_delay_ms() -> u64 {
    500
}

fn default_skip_extensions() -> Vec<String> {
    [".pdf", ".jpg", ".png", ".jpeg", ".gif", ".bmp", ".tiff"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_common_subpages() -> Vec<String> {
    [
        "about-us",
        "about",
        "team",
        "meet-the-team",
        "services",
        "products",
        "our-work",
        "testimonials",
        "reviews",
        "portfolio",
        "gallery",
        "pricing",
        "rates",
        "faqs",
        "contact",
        "contact-us",
        "support",
        "help",
        "careers",
        "jobs",
        "our-story",
        "mission",
        "vision",
        "values",
        "ethics",
        "history",
        "management",
        "staff",
        "leadership",
        "executives",
        "directors",
        "clients",
        "customers",
        "partners",
        "investors",
        "stakeholders",
        "certifications",
        "accreditations",
        "awards",
        "honors",
        "recognition",
        "press",
        "media",
        "news",
        "events",
        "webinars",
        "seminars",
        "workshops",
        "conferences",
        "exhibitions",
        "tradeshows",
        "case-studies",
        "whitepapers",
        "reports",
        "ebooks",
        "guides",
        "blog",
        "insights",
        "resources",
        "articles",
        "papers",
        "newsletters",
        "announcements",
        "updates",
        "releases",
        "publications",
        "privacy-policy",
        "terms-of-service",
        "legal",
        "compliance",
        "security",
        "login",
        "register",
        "signup",
        "dashboard",
        "forums",
        "community",
        "support-center",
        "faq",
        "help-center",
        "store",
        "shop",
        "booking",
        "schedule",
        "appointments",
        "locations",
        "offices",
        "branches",
        "contact-form",
        "inquiry",
        "get-a-quote",
        "find-us",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_content_tags() -> Vec<String> {
    [
        "body", "main", "article", "section", "nav", "aside", "header", "footer",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_feed_url() -> String {
    "https://trends.google.com/trending/rss".to_string()
}

fn default_geo() -> String {
    "US".to_string()
}

fn default_max_trends() -> usize {
    3
}

fn default_max_articles_per_trend() -> usize {
    5
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_ideas_path() -> String {
    "./article_ideas.txt".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scraper.max_text_length, 500_000);
        assert_eq!(config.scraper.article_delay_ms, 500);
        assert_eq!(config.trends.geo, "US");
        assert_eq!(config.trends.max_trends, 3);
        assert_eq!(config.llm.model, "gpt-4o-mini");
    }

    #[test]
    fn test_default_skip_extensions_start_with_dot() {
        let config = ScraperConfig::default();
        assert!(config.skip_extensions.iter().all(|e| e.starts_with('.')));
    }

    #[test]
    fn test_default_common_subpages_contains_expected_slugs() {
        let config = ScraperConfig::default();
        assert!(config.common_subpages.contains(&"about-us".to_string()));
        assert!(config.common_subpages.contains(&"pricing".to_string()));
        assert!(config.common_subpages.contains(&"careers".to_string()));
        assert!(config.common_subpages.contains(&"faq".to_string()));
    }
}
