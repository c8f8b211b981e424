//! Configuration module for trendscout
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting has a default taken from the deployed constants, so
//! a config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use trendscout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping as: {}", config.scraper.user_agent);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, LlmConfig, OutputConfig, ScraperConfig, TrendsConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
