//! Kahu: a breadth-first web crawler for the .nz web
//!
//! This crate implements a time-bounded breadth-first crawler that explores a
//! seed set of URLs, honors per-site exclusion directives, deduplicates
//! discovered URLs and domains, and records per-page metadata together with
//! aggregate statistics.

pub mod config;
pub mod crawler;
pub mod output;
pub mod robots;
pub mod seeds;
pub mod url;

use thiserror::Error;

/// Main error type for Kahu operations
#[derive(Debug, Error)]
pub enum KahuError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read seed list: {0}")]
    SeedList(#[source] std::io::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

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

/// Result type alias for Kahu operations
pub type Result<T> = std::result::Result<T, KahuError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlOutcome, CrawlTask, DedupTracker, EmptyFrontier, Frontier};
pub use output::StatsCollector;
