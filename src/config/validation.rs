use crate::config::types::{Config, LlmConfig, OutputConfig, ScraperConfig, TrendsConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_trends_config(&config.trends)?;
    validate_llm_config(&config.llm)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates scraper configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.max_text_length < 1 {
        return Err(ConfigError::Validation(format!(
            "max-text-length must be >= 1, got {}",
            config.max_text_length
        )));
    }

    if config.request_timeout_secs < 1 || config.request_timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be between 1 and 300, got {}",
            config.request_timeout_secs
        )));
    }

    if config.article_delay_ms > 10_000 {
        return Err(ConfigError::Validation(format!(
            "article-delay-ms must be <= 10000, got {}",
            config.article_delay_ms
        )));
    }

    for ext in &config.skip_extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "skip-extensions entries must start with '.', got '{}'",
                ext
            )));
        }
    }

    for slug in &config.common_subpages {
        if slug.is_empty() || slug.contains('/') {
            return Err(ConfigError::Validation(format!(
                "common-subpages entries must be bare path segments, got '{}'",
                slug
            )));
        }
    }

    if config.content_tags.is_empty() {
        return Err(ConfigError::Validation(
            "content-tags cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates trends configuration
fn validate_trends_config(config: &TrendsConfig) -> Result<(), ConfigError> {
    Url::parse(&config.feed_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid feed-url: {}", e)))?;

    // Region codes are two uppercase ASCII letters (e.g. "US", "GB")
    if config.geo.len() != 2 || !config.geo.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ConfigError::Validation(format!(
            "geo must be a two-letter uppercase region code, got '{}'",
            config.geo
        )));
    }

    if config.max_trends < 1 {
        return Err(ConfigError::Validation(format!(
            "max-trends must be >= 1, got {}",
            config.max_trends
        )));
    }

    if config.max_articles_per_trend < 1 {
        return Err(ConfigError::Validation(format!(
            "max-articles-per-trend must be >= 1, got {}",
            config.max_articles_per_trend
        )));
    }

    Ok(())
}

/// Validates language-model configuration
fn validate_llm_config(config: &LlmConfig) -> Result<(), ConfigError> {
    Url::parse(&config.api_base)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid api-base: {}", e)))?;

    if config.model.is_empty() {
        return Err(ConfigError::Validation("model cannot be empty".to_string()));
    }

    if !(0.0..=2.0).contains(&config.temperature) {
        return Err(ConfigError::Validation(format!(
            "temperature must be between 0.0 and 2.0, got {}",
            config.temperature
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.ideas_path.is_empty() {
        return Err(ConfigError::Validation(
            "ideas-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = Config::default();
        config.scraper.user_agent = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_max_text_length_rejected() {
        let mut config = Config::default();
        config.scraper.max_text_length = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = Config::default();
        config.scraper.request_timeout_secs = 0;
        assert!(validate(&config).is_err());

        config.scraper.request_timeout_secs = 301;
        assert!(validate(&config).is_err());

        config.scraper.request_timeout_secs = 300;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_excessive_article_delay_rejected() {
        let mut config = Config::default();
        config.scraper.article_delay_ms = 10_001;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_extension_without_dot_rejected() {
        let mut config = Config::default();
        config.scraper.skip_extensions.push("pdf".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_slug_with_slash_rejected() {
        let mut config = Config::default();
        config.scraper.common_subpages.push("about/us".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_geo_rejected() {
        let mut config = Config::default();

        config.trends.geo = "usa".to_string();
        assert!(validate(&config).is_err());

        config.trends.geo = "us".to_string();
        assert!(validate(&config).is_err());

        config.trends.geo = "DE".to_string();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_invalid_feed_url_rejected() {
        let mut config = Config::default();
        config.trends.feed_url = "not a url".to_string();
        let result = validate(&config);
        assert!(matches!(result.unwrap_err(), ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_temperature_bounds() {
        let mut config = Config::default();

        config.llm.temperature = 2.1;
        assert!(validate(&config).is_err());

        config.llm.temperature = -0.1;
        assert!(validate(&config).is_err());

        config.llm.temperature = 0.0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_model_rejected() {
        let mut config = Config::default();
        config.llm.model = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_ideas_path_rejected() {
        let mut config = Config::default();
        config.output.ideas_path = String::new();
        assert!(validate(&config).is_err());
    }
}
