//! Integration tests for the site crawler
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full crawl cycle end-to-end: discovery, filtering, page extraction,
//! aggregation, and capping.

use trendscout::config::ScraperConfig;
use trendscout::scraper::{build_http_client, scrape_site, scrape_single_page};
use trendscout::TrendScoutError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

#[tokio::test]
async fn test_full_crawl_with_slug_and_internal_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Root links to a relative slug, an absolute internal page, and an
    // external site that must be excluded
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(&format!(
            r#"<p>Root content</p>
            <a href="/about-us">About</a>
            <a href="{}/custom">Custom</a>
            <a href="https://external.com/partner">Partner</a>"#,
            base_url
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about-us"))
        .respond_with(html_page("<p>About content</p>"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/custom"))
        .respond_with(html_page("<p>Custom content</p>"))
        .mount(&mock_server)
        .await;

    let config = ScraperConfig::default();
    let client = build_http_client(&config).unwrap();
    let result = scrape_site(&client, &format!("{}/", base_url), &config)
        .await
        .unwrap();

    // Root + about-us + custom; the external link is not a candidate
    assert_eq!(result.pages_found, 3);
    assert_eq!(result.pages_scraped, 3);
    assert!(result.text.contains("Root content"));
    assert!(result.text.contains("About content"));
    assert!(result.text.contains("Custom content"));
    assert_eq!(result.total_chars, result.text.chars().count());
}

#[tokio::test]
async fn test_discovery_failure_still_attempts_root() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // One GET for discovery, one for the single-page attempt
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = ScraperConfig::default();
    let client = build_http_client(&config).unwrap();
    let result = scrape_site(&client, &format!("{}/", base_url), &config)
        .await
        .unwrap();

    assert_eq!(result.pages_found, 1);
    assert_eq!(result.pages_scraped, 0);
    assert_eq!(result.text, "");
}

#[tokio::test]
async fn test_malformed_root_url_is_a_hard_failure() {
    let config = ScraperConfig::default();
    let client = build_http_client(&config).unwrap();

    let result = scrape_site(&client, "not a url", &config).await;
    assert!(matches!(
        result,
        Err(TrendScoutError::InvalidRootUrl { .. })
    ));
}

#[tokio::test]
async fn test_binary_extension_never_fetched() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(&format!(
            r#"<p>Root content</p><a href="{}/brochure.PDF">Brochure</a>"#,
            base_url
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/brochure.PDF"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0) // Skipped by extension before any request
        .mount(&mock_server)
        .await;

    let config = ScraperConfig::default();
    let client = build_http_client(&config).unwrap();
    let result = scrape_site(&client, &format!("{}/", base_url), &config)
        .await
        .unwrap();

    // The PDF is a candidate but contributes empty content
    assert_eq!(result.pages_found, 2);
    assert_eq!(result.pages_scraped, 1);
    assert_eq!(result.text, "Root content");
}

#[tokio::test]
async fn test_script_content_never_appears_in_output() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("<script>evil()</script><p>Hello</p>"))
        .mount(&mock_server)
        .await;

    let config = ScraperConfig::default();
    let client = build_http_client(&config).unwrap();
    let result = scrape_site(&client, &format!("{}/", base_url), &config)
        .await
        .unwrap();

    assert_eq!(result.text, "Hello");
}

#[tokio::test]
async fn test_aggregate_cap_truncates_combined_text() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let long_paragraph = "x".repeat(300);
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(&format!(
            r#"<p>{}</p>
            <a href="{}/page1">One</a>
            <a href="{}/page2">Two</a>"#,
            long_paragraph, base_url, base_url
        )))
        .mount(&mock_server)
        .await;

    for page in ["/page1", "/page2"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(html_page(&format!("<p>{}</p>", long_paragraph)))
            .mount(&mock_server)
            .await;
    }

    let config = ScraperConfig {
        max_text_length: 100,
        ..ScraperConfig::default()
    };
    let client = build_http_client(&config).unwrap();
    let result = scrape_site(&client, &format!("{}/", base_url), &config)
        .await
        .unwrap();

    assert_eq!(result.pages_scraped, 3);
    assert_eq!(result.total_chars, 100);
    assert_eq!(result.text.chars().count(), 100);
}

#[tokio::test]
async fn test_browser_user_agent_header_sent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // The mock only matches when the configured UA is sent
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "trendscout-test/1.0"))
        .respond_with(html_page("<p>Agent checked</p>"))
        .mount(&mock_server)
        .await;

    let config = ScraperConfig {
        user_agent: "trendscout-test/1.0".to_string(),
        ..ScraperConfig::default()
    };
    let client = build_http_client(&config).unwrap();
    let result = scrape_site(&client, &format!("{}/", base_url), &config)
        .await
        .unwrap();

    assert_eq!(result.pages_scraped, 1);
    assert_eq!(result.text, "Agent checked");
}

#[tokio::test]
async fn test_single_page_paragraphs_joined_with_newline() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(html_page("<p>First</p><p>Second</p>"))
        .mount(&mock_server)
        .await;

    let config = ScraperConfig::default();
    let client = build_http_client(&config).unwrap();
    let text = scrape_single_page(&client, &format!("{}/article", base_url), &config).await;

    assert_eq!(text, "First\nSecond");
}

#[tokio::test]
async fn test_single_page_fetch_failure_becomes_empty_content() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let config = ScraperConfig::default();
    let client = build_http_client(&config).unwrap();
    let text = scrape_single_page(&client, &format!("{}/gone", base_url), &config).await;

    assert_eq!(text, "");
}
