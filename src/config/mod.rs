//! Configuration module for Kahu
//!
//! Handles loading, parsing, and validating TOML configuration files.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, SeedsConfig, UserAgentConfig};
pub use validation::validate;
