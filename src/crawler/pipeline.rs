//! Fetch pipeline: per-task gates, fetch, and link discovery
//!
//! A task passes through three gates before its body is read: the domain
//! filter, the content-type check, and the politeness filter. A gate miss is
//! a skip, not an error; the task is dropped with no record of any kind.
//! Protocol-level HTTP errors and transport/robots failures are surfaced as
//! typed errors for the crawl loop to classify.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::crawler::fetcher::{build_http_client, content_type_of, fetch_page, FetchError};
use crate::crawler::frontier::{CrawlTask, Frontier};
use crate::crawler::parser::extract_links;
use crate::crawler::DedupTracker;
use crate::robots::{is_allowed, PolitenessFilter};
use std::time::Duration;
use thiserror::Error;

/// A task that failed inside the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The page fetch returned a 4xx/5xx status; recorded as task metadata,
    /// not as an error-log entry
    #[error("HTTP status {code} for {url}")]
    HttpStatus { url: String, code: u16 },

    /// The page fetch or body read failed below the protocol level
    #[error("fetch failed for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    /// The robots.txt fetch inside the politeness gate failed
    #[error("robots.txt fetch failed for {domain}: {source}")]
    Robots {
        domain: String,
        source: reqwest::Error,
    },
}

/// Validates, fetches, and expands one task at a time
pub struct FetchPipeline {
    client: reqwest::Client,
    politeness: PolitenessFilter,
    domain_filter: String,
    fetch_timeout: Duration,
}

impl FetchPipeline {
    /// Creates a pipeline from the crawler and user-agent configuration
    pub fn new(
        crawler: &CrawlerConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = build_http_client(user_agent)?;
        let politeness = PolitenessFilter::new(client.clone(), crawler.robots_cache);

        Ok(Self {
            client,
            politeness,
            domain_filter: crawler.domain_filter.clone(),
            fetch_timeout: Duration::from_secs(crawler.fetch_timeout_secs),
        })
    }

    /// Processes a single task
    ///
    /// Returns `Ok(true)` when the page was fetched and its links enqueued,
    /// `Ok(false)` when a gate skipped the task. Newly discovered URLs are
    /// deduplicated through `dedup` and pushed onto `frontier` as depth+1
    /// children; a child's priority is 1 for a first-seen domain and 2
    /// otherwise.
    pub async fn process(
        &mut self,
        task: &mut CrawlTask,
        dedup: &mut DedupTracker,
        frontier: &mut Frontier,
    ) -> Result<bool, PipelineError> {
        // Domain gate
        if !task.domain.contains(&self.domain_filter) {
            return Ok(false);
        }

        let response = fetch_page(&self.client, &task.url, self.fetch_timeout)
            .await
            .map_err(|e| match e {
                FetchError::HttpStatus { code } => PipelineError::HttpStatus {
                    url: task.url.clone(),
                    code,
                },
                FetchError::Transport(source) => PipelineError::Fetch {
                    url: task.url.clone(),
                    source,
                },
            })?;

        // Content-type gate
        let content_type = content_type_of(&response);
        if !content_type.contains("text/html") {
            return Ok(false);
        }

        // Politeness gate; a robots failure propagates, it is not a skip
        let exclusions = self
            .politeness
            .fetch_exclusions(&task.scheme, &task.domain)
            .await
            .map_err(|source| PipelineError::Robots {
                domain: task.domain.clone(),
                source,
            })?;
        if !is_allowed(&task.url, &exclusions) {
            return Ok(false);
        }

        // Fetch the body and record the task's outcome fields
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|source| PipelineError::Fetch {
            url: task.url.clone(),
            source,
        })?;

        task.page_size = Some(body.len() as u64);
        task.page_status = Some(status.to_string());
        task.content_type = Some(content_type);

        // Discover and enqueue children
        let html = String::from_utf8_lossy(&body);
        for link in extract_links(&html, &task.scheme, &task.domain) {
            if !dedup.register_url_if_new(&link) {
                continue;
            }

            let mut child = CrawlTask::new(link, task.depth + 1, 1);
            if !dedup.register_domain_if_new(&child.domain) {
                child.priority = 2;
            }

            frontier.push(child);
        }

        Ok(true)
    }
}
