//! Crawler module: scheduling, deduplication, fetching, and orchestration
//!
//! This module contains the core crawling logic:
//! - The frontier priority queue and its crawl tasks
//! - URL and domain deduplication
//! - HTTP fetching and HTML link extraction
//! - The per-task fetch pipeline and the overall crawl loop

mod coordinator;
mod dedup;
mod fetcher;
mod frontier;
mod parser;
mod pipeline;

pub use coordinator::{run_crawl, CrawlLoop, CrawlOutcome};
pub use dedup::DedupTracker;
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use frontier::{CrawlTask, EmptyFrontier, Frontier};
pub use parser::extract_links;
pub use pipeline::{FetchPipeline, PipelineError};

use crate::config::Config;
use crate::KahuError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Open the crawl and error logs
/// 2. Build the HTTP client
/// 3. Seed the frontier from the configured seed file
/// 4. Fetch pages in breadth-first order until drained or out of time
/// 5. Append the summary block
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - The terminal state of the run
/// * `Err(KahuError)` - Crawl failed
pub async fn crawl(config: Config) -> Result<CrawlOutcome, KahuError> {
    run_crawl(config).await
}
