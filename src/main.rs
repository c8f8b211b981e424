//! Trendscout main entry point
//!
//! Command-line dashboard for trending search topics, site scraping, and
//! LLM-generated article ideas.

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use trendscout::config::{load_config_with_hash, Config};
use trendscout::dashboard::{fetch_trend_rows, generate_article_ideas};
use trendscout::llm::OpenAiClient;
use trendscout::output::{print_crawl_report, print_trend_table, save_text};
use trendscout::scraper::{
    build_http_client, extract_tag_text, fetch_html, has_skipped_extension, scrape_single_page,
    scrape_site, FetchOutcome,
};
use trendscout::trends::RssTrendsClient;

/// Trendscout: trending topics, site scraping, and article ideas
#[derive(Parser, Debug)]
#[command(name = "trendscout")]
#[command(version)]
#[command(about = "Trending-topics dashboard with site scraping and LLM article ideas")]
struct Cli {
    /// Path to TOML configuration file (built-in defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch trending topics and print the dashboard table
    Trends {
        /// Override the configured region code (e.g. US, GB)
        #[arg(long)]
        geo: Option<String>,
    },

    /// Crawl a site (root plus one-hop subpages) and save the combined text
    Scrape {
        /// Root URL to crawl (absolute, with scheme)
        url: String,

        /// Output file (defaults to <host>_scraped.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract the text of a single page
    Page {
        /// URL to extract text from
        url: String,

        /// Use the content-tag extractor instead of paragraphs
        #[arg(long)]
        tags: bool,
    },

    /// Generate article ideas from a trending topic's news coverage
    Ideas {
        /// Override the configured region code
        #[arg(long)]
        geo: Option<String>,

        /// Index of the trending topic to use (1-based)
        #[arg(long, default_value_t = 1)]
        trend: usize,

        /// Read article links from a text file instead of live trends
        #[arg(long, value_name = "PATH", conflicts_with_all = ["geo", "trend"])]
        links_file: Option<PathBuf>,

        /// Output file for the generated ideas
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((config, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    config
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Trends { geo } => handle_trends(config, geo).await,
        Command::Scrape { url, output } => handle_scrape(&config, &url, output).await,
        Command::Page { url, tags } => handle_page(&config, &url, tags).await,
        Command::Ideas {
            geo,
            trend,
            links_file,
            output,
        } => handle_ideas(config, geo, trend, links_file, output).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("trendscout=info,warn"),
            1 => EnvFilter::new("trendscout=debug,info"),
            2 => EnvFilter::new("trendscout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the trends command: fetch and display the dashboard table
async fn handle_trends(mut config: Config, geo: Option<String>) -> anyhow::Result<()> {
    if let Some(geo) = geo {
        config.trends.geo = geo;
    }

    let client = build_http_client(&config.scraper)?;
    let provider = RssTrendsClient::new(client, config.trends.feed_url.clone());

    let started = Instant::now();
    let rows = fetch_trend_rows(&provider, &config).await?;

    let refreshed_at = Local::now().format("%A, %B %d, %Y at %I:%M %p").to_string();
    print_trend_table(&rows, &config.trends.geo, &refreshed_at);
    println!(
        "Dashboard took {:.2} seconds to pull results.",
        started.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Handles the scrape command: crawl one site and persist the combined text
async fn handle_scrape(
    config: &Config,
    url: &str,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let client = build_http_client(&config.scraper)?;
    let result = scrape_site(&client, url, &config.scraper).await?;

    print_crawl_report(&result);

    let path = output.unwrap_or_else(|| {
        let host = result.root_url.host_str().unwrap_or("site");
        PathBuf::from(format!("{}_scraped.txt", host))
    });

    match save_text(&path, &result.text) {
        Ok(()) => println!("\nScraped content saved to {}", path.display()),
        Err(e) => {
            tracing::error!(
                "An error occurred while writing to {}: {}",
                path.display(),
                e
            );
        }
    }

    Ok(())
}

/// Handles the page command: extract text from a single URL
async fn handle_page(config: &Config, url: &str, tags: bool) -> anyhow::Result<()> {
    let client = build_http_client(&config.scraper)?;

    let text = if tags {
        if has_skipped_extension(url, &config.scraper.skip_extensions) {
            String::new()
        } else {
            match fetch_html(&client, url).await {
                FetchOutcome::Success { body } => {
                    extract_tag_text(&body, &config.scraper.content_tags)
                }
                FetchOutcome::HttpError { status } => {
                    tracing::warn!("Unable to fetch {}: HTTP {}", url, status);
                    String::new()
                }
                FetchOutcome::NetworkError { error } => {
                    tracing::warn!("Unable to fetch {}: {}", url, error);
                    String::new()
                }
            }
        }
    } else {
        scrape_single_page(&client, url, &config.scraper).await
    };

    if text.is_empty() {
        println!("No text extracted from {}", url);
    } else {
        println!("{}", text);
    }

    Ok(())
}

/// Handles the ideas command: scrape a trend's coverage and ask for ideas
async fn handle_ideas(
    mut config: Config,
    geo: Option<String>,
    trend_index: usize,
    links_file: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(geo) = geo {
        config.trends.geo = geo;
    }

    let links_blob = match links_file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read links file {}", path.display()))?,
        None => {
            let client = build_http_client(&config.scraper)?;
            let provider = RssTrendsClient::new(client, config.trends.feed_url.clone());
            let rows = fetch_trend_rows(&provider, &config).await?;

            let row = trend_index
                .checked_sub(1)
                .and_then(|i| rows.get(i))
                .with_context(|| {
                    format!(
                        "Trend index {} out of range ({} topics available for {})",
                        trend_index,
                        rows.len(),
                        config.trends.geo
                    )
                })?;

            println!("Generating article ideas for trending topic: {}", row.keyword);
            row.links_html.clone()
        }
    };

    let llm = OpenAiClient::from_env(&config.llm)?;
    let scrape_client = build_http_client(&config.scraper)?;

    match generate_article_ideas(&llm, &scrape_client, &links_blob, &config).await? {
        Some(ideas) => {
            println!("\n{}\n", ideas);

            let path = output.unwrap_or_else(|| PathBuf::from(&config.output.ideas_path));
            match save_text(&path, &ideas) {
                Ok(()) => println!("Ideas saved to {}", path.display()),
                Err(e) => {
                    tracing::error!("Failed to save ideas to {}: {}", path.display(), e);
                }
            }
        }
        None => println!("Nothing to report: no usable article content found."),
    }

    Ok(())
}
