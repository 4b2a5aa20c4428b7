//! Append-only crawl logs
//!
//! Two plain-text files: a per-task metadata log and an error log, each with
//! a header row written once when the log is created. The summary block is
//! appended to the task log after the crawl loop terminates. Records are
//! written straight through so the files are inspectable while a crawl runs.

use crate::config::OutputConfig;
use crate::crawler::CrawlTask;
use crate::output::stats::StatsCollector;
use chrono::Local;
use std::fs::File;
use std::io::{self, Write};

/// Task-metadata and error log writers for one crawl run
pub struct CrawlLog {
    log: File,
    errors: File,
}

impl CrawlLog {
    /// Creates (truncating) both log files and writes their header rows
    pub fn create(config: &OutputConfig) -> io::Result<Self> {
        let mut log = File::create(&config.log_path)?;
        writeln!(log, "url, time, page_size, depth, page_status")?;

        let mut errors = File::create(&config.error_log_path)?;
        writeln!(errors, "url, error")?;

        Ok(Self { log, errors })
    }

    /// Appends one task-metadata record
    ///
    /// Optional fields not populated by the pipeline are recorded as `-`.
    pub fn record_task(&mut self, task: &CrawlTask) -> io::Result<()> {
        let timestamp = Local::now().format("%H:%M:%S %m/%d/%Y");
        writeln!(
            self.log,
            "{}, {}, {}, {}, {}",
            task.url,
            timestamp,
            opt_field(&task.page_size.map(|s| s.to_string())),
            task.depth,
            opt_field(&task.page_status),
        )
    }

    /// Appends one error record
    pub fn record_error(&mut self, url: &str, error: &str) -> io::Result<()> {
        writeln!(self.errors, "{}, {}", url, error)
    }

    /// Appends the final summary block to the task log
    pub fn write_summary(&mut self, stats: &StatsCollector, elapsed_secs: u64) -> io::Result<()> {
        writeln!(self.log)?;
        writeln!(self.log)?;
        writeln!(self.log, "--------stats--------")?;
        writeln!(self.log, "Number of URLs Crawled : {}", stats.url_count())?;
        writeln!(self.log)?;
        writeln!(self.log, "Number of 200 status : {}", stats.status("200"))?;
        writeln!(self.log, "Number of 403 status : {}", stats.status("403"))?;
        writeln!(self.log, "Number of 404 status : {}", stats.status("404"))?;
        writeln!(self.log, "Total time in Seconds : {}", elapsed_secs)?;
        writeln!(self.log, "Total Size : {}", stats.total_size())?;
        Ok(())
    }
}

fn opt_field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
