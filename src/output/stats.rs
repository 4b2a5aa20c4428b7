//! Aggregate crawl statistics
//!
//! A pure accumulator fed one completed task at a time by the crawl loop and
//! read once by the summary writer at termination.

use crate::crawler::CrawlTask;
use std::collections::HashMap;

/// Status codes tracked with their own counters
pub const TRACKED_STATUSES: [&str; 3] = ["200", "403", "404"];

/// Bucket for any status outside the tracked set, including tasks that reach
/// the stats step with no status at all after an unexpected failure
pub const OTHER_BUCKET: &str = "other";

/// Running totals over completed tasks
#[derive(Debug, Clone)]
pub struct StatsCollector {
    url_count: u64,
    status_count: HashMap<String, u64>,
    total_size: u64,
}

impl StatsCollector {
    /// Creates a collector with all buckets at zero
    pub fn new() -> Self {
        let mut status_count = HashMap::new();
        for code in TRACKED_STATUSES {
            status_count.insert(code.to_string(), 0);
        }
        status_count.insert(OTHER_BUCKET.to_string(), 0);

        Self {
            url_count: 0,
            status_count,
            total_size: 0,
        }
    }

    /// Accumulates one completed task
    pub fn record(&mut self, task: &CrawlTask) {
        self.url_count += 1;

        let bucket = match task.page_status.as_deref() {
            Some(code) if TRACKED_STATUSES.contains(&code) => code,
            _ => OTHER_BUCKET,
        };
        *self.status_count.entry(bucket.to_string()).or_insert(0) += 1;

        if let Some(size) = task.page_size {
            self.total_size += size;
        }
    }

    /// Number of tasks recorded
    pub fn url_count(&self) -> u64 {
        self.url_count
    }

    /// Counter for a status bucket, zero for unknown bucket names
    pub fn status(&self, code: &str) -> u64 {
        self.status_count.get(code).copied().unwrap_or(0)
    }

    /// Sum of `page_size` over recorded tasks where it was set
    pub fn total_size(&self) -> u64 {
        self.total_size
    }
}

impl Default for StatsCollector {
    fn default() -> Self {
        Self::new()
    }
}
