//! Output module: text-file persistence and terminal presentation
//!
//! The dashboard writes plain UTF-8 text; there is no structured format at
//! this layer. A write failure is reported to the caller and logged, but the
//! in-memory content is untouched and still usable.

use crate::dashboard::TrendRow;
use crate::scraper::CrawlResult;
use std::io;
use std::path::Path;

/// Writes `content` to `path`, overwriting any existing file
pub fn save_text(path: &Path, content: &str) -> io::Result<()> {
    std::fs::write(path, content)?;
    tracing::info!("File saved to {}", path.display());
    Ok(())
}

/// Prints the trending-topics table
pub fn print_trend_table(rows: &[TrendRow], geo: &str, refreshed_at: &str) {
    println!("=== Trending Topics ({}) ===\n", geo);
    println!("Dashboard last refreshed at: {}\n", refreshed_at);

    if rows.is_empty() {
        println!("No trending data available.");
        return;
    }

    for (index, row) in rows.iter().enumerate() {
        println!("{}. {}", index + 1, row.keyword);
        println!("   Volume:    {}", row.volume);
        println!("   Timeframe: {}", row.timeframe);
        if row.article_urls.is_empty() {
            println!("   Related articles: none");
        } else {
            println!("   Related articles:");
            for url in &row.article_urls {
                println!("     - {}", url);
            }
        }
        println!();
    }
}

/// Prints the crawl summary for one site
pub fn print_crawl_report(result: &CrawlResult) {
    println!("=== Crawl Report ===\n");
    println!("Root URL:       {}", result.root_url);
    println!("Pages found:    {}", result.pages_found);
    println!("Pages scraped:  {}", result.pages_scraped);
    println!("Characters:     {}", result.total_chars);
    println!("Elapsed:        {:.2}s", result.elapsed.as_secs_f64());
}
