use serde::Deserialize;

/// Main configuration structure for Kahu
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    pub seeds: SeedsConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum wall-clock duration of a crawl run, in seconds. Zero is legal
    /// and terminates the loop before the first fetch.
    #[serde(rename = "time-budget-secs", default = "default_time_budget")]
    pub time_budget_secs: u64,

    /// Per-request timeout for page fetches, in seconds
    #[serde(rename = "fetch-timeout-secs", default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Substring a task's domain must contain to be fetched
    #[serde(rename = "domain-filter", default = "default_domain_filter")]
    pub domain_filter: String,

    /// Cache computed robots.txt exclusions per domain for the run
    #[serde(rename = "robots-cache", default)]
    pub robots_cache: bool,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the per-task crawl log
    #[serde(rename = "log-path")]
    pub log_path: String,

    /// Path to the error log
    #[serde(rename = "error-log-path")]
    pub error_log_path: String,
}

/// Seed list configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SeedsConfig {
    /// Path to the line-delimited seed URL file
    pub file: String,
}

fn default_time_budget() -> u64 {
    18000
}

fn default_fetch_timeout() -> u64 {
    5
}

fn default_domain_filter() -> String {
    ".nz".to_string()
}
