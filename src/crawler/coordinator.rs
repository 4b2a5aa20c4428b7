//! Crawl loop - main crawl orchestration logic
//!
//! Drives the whole run: seeds the frontier, pops tasks in (depth, priority)
//! order, feeds them through the fetch pipeline, classifies each outcome,
//! and keeps the logs and statistics current. The loop owns every piece of
//! mutable crawl state; nothing is shared.

use crate::config::Config;
use crate::crawler::frontier::{CrawlTask, Frontier};
use crate::crawler::pipeline::{FetchPipeline, PipelineError};
use crate::crawler::DedupTracker;
use crate::output::{CrawlLog, StatsCollector};
use crate::seeds::load_seeds;
use crate::KahuError;
use std::path::Path;
use std::time::{Duration, Instant};

/// Terminal state of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlOutcome {
    /// The frontier emptied before the time budget ran out
    Drained,

    /// The time budget ran out with tasks still pending
    TimedOut,
}

/// The crawl control loop
pub struct CrawlLoop {
    config: Config,
    pipeline: FetchPipeline,
    frontier: Frontier,
    dedup: DedupTracker,
    stats: StatsCollector,
    log: CrawlLog,
}

impl CrawlLoop {
    /// Creates a crawl loop: opens the logs, builds the HTTP client, and
    /// seeds the frontier from the configured seed file
    ///
    /// Every seed line becomes a depth-0, priority-1 task; duplicate lines
    /// are enqueued once. Seed domains are registered up front so a link
    /// back to a seed's domain is priced as an already-known domain.
    pub fn new(config: Config) -> Result<Self, KahuError> {
        let log = CrawlLog::create(&config.output)?;
        let pipeline = FetchPipeline::new(&config.crawler, &config.user_agent)?;

        let mut frontier = Frontier::new();
        let mut dedup = DedupTracker::new();

        let seed_list =
            load_seeds(Path::new(&config.seeds.file)).map_err(KahuError::SeedList)?;
        tracing::info!("Loaded {} seed entries", seed_list.len());

        for seed in seed_list {
            if !dedup.register_url_if_new(&seed) {
                continue;
            }

            let task = CrawlTask::new(seed, 0, 1);
            dedup.register_domain_if_new(&task.domain);
            frontier.push(task);
        }

        Ok(Self {
            config,
            pipeline,
            frontier,
            dedup,
            stats: StatsCollector::new(),
            log,
        })
    }

    /// Runs the crawl to its terminal state
    ///
    /// Iterates while the frontier is non-empty and the elapsed time is
    /// under the configured budget; emptiness is checked first, so an empty
    /// frontier drains even with a zero budget. The budget is sampled only
    /// between iterations; an in-flight fetch is never interrupted. The
    /// summary block is written before returning.
    pub async fn run(&mut self) -> Result<CrawlOutcome, KahuError> {
        let start = Instant::now();
        let budget = Duration::from_secs(self.config.crawler.time_budget_secs);

        tracing::info!(
            "Starting crawl: {} seeds in frontier, budget {}s",
            self.frontier.len(),
            budget.as_secs()
        );

        let outcome = loop {
            if self.frontier.is_empty() {
                break CrawlOutcome::Drained;
            }
            if start.elapsed() >= budget {
                break CrawlOutcome::TimedOut;
            }

            let mut task = match self.frontier.pop() {
                Ok(task) => task,
                Err(_) => break CrawlOutcome::Drained,
            };

            match self
                .pipeline
                .process(&mut task, &mut self.dedup, &mut self.frontier)
                .await
            {
                // Gate skip: the task vanishes with no record of any kind
                Ok(false) => {
                    tracing::debug!("Skipped {}", task.url);
                    continue;
                }
                Ok(true) => {}
                // Protocol-level error: the status is ordinary metadata
                Err(PipelineError::HttpStatus { code, .. }) => {
                    task.page_status = Some(code.to_string());
                }
                // Anything else is unexpected: error log, then fall through
                // with whatever fields the task holds
                Err(err) => {
                    tracing::warn!("Unexpected failure: {}", err);
                    self.log.record_error(&task.url, &err.to_string())?;
                }
            }

            self.log.record_task(&task)?;
            self.stats.record(&task);
            tracing::info!(
                "Crawled {} (depth {}, {} pending)",
                task.url,
                task.depth,
                self.frontier.len()
            );
        };

        let elapsed = start.elapsed();
        self.log.write_summary(&self.stats, elapsed.as_secs())?;

        tracing::info!(
            "Crawl finished ({:?}): {} URLs in {:?}, {} domains seen",
            outcome,
            self.stats.url_count(),
            elapsed,
            self.dedup.domain_count()
        );

        Ok(outcome)
    }

    /// Aggregate statistics accumulated so far
    pub fn stats(&self) -> &StatsCollector {
        &self.stats
    }

    /// Number of tasks still pending
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}

/// Runs a complete crawl operation
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - The terminal state the loop reached
/// * `Err(KahuError)` - Setup or log I/O failed
pub async fn run_crawl(config: Config) -> Result<CrawlOutcome, KahuError> {
    let mut crawl_loop = CrawlLoop::new(config)?;
    crawl_loop.run().await
}
