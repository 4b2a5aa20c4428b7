//! Output module for crawl logs and statistics
//!
//! This module handles:
//! - Appending per-task metadata and error records
//! - Accumulating aggregate statistics over completed tasks
//! - Writing the final summary block

mod log;
pub mod stats;

pub use log::CrawlLog;
pub use stats::{StatsCollector, OTHER_BUCKET, TRACKED_STATUSES};
