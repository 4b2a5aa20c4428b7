//! Politeness filtering
//!
//! Fetches a site's robots.txt and interprets its `Disallow:` directives into
//! an exclusion list checked before any page fetch. A failed robots fetch
//! (network error or non-success status) propagates to the caller; the
//! crawler never falls back to treating a site as unrestricted.

mod cache;
mod parser;

pub use cache::ExclusionCache;
pub use parser::{is_allowed, parse_exclusions};

use reqwest::Client;

/// Per-site exclusion filter
///
/// By default every call refetches the site's robots.txt, even for a domain
/// already checked earlier in the run. With the cache enabled, successfully
/// computed exclusion lists are reused per domain for the rest of the run.
pub struct PolitenessFilter {
    client: Client,
    cache: Option<ExclusionCache>,
}

impl PolitenessFilter {
    /// Creates a filter using the given HTTP client
    pub fn new(client: Client, use_cache: bool) -> Self {
        Self {
            client,
            cache: use_cache.then(ExclusionCache::new),
        }
    }

    /// Fetches and interprets the exclusion directives for a site
    ///
    /// Issues a GET for `{scheme}://{domain}/robots.txt` with no request
    /// timeout and parses the result via [`parse_exclusions`]. A missing file
    /// surfaces as a status error.
    pub async fn fetch_exclusions(
        &mut self,
        scheme: &str,
        domain: &str,
    ) -> Result<Vec<String>, reqwest::Error> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(domain) {
                tracing::debug!("Using cached exclusions for domain: {}", domain);
                return Ok(hit.clone());
            }
        }

        let robots_url = format!("{}://{}/robots.txt", scheme, domain);
        tracing::debug!("Fetching {}", robots_url);

        let response = self.client.get(&robots_url).send().await?;
        let response = response.error_for_status()?;
        let content = response.text().await?;

        let exclusions = parse_exclusions(&content, scheme, domain);

        if let Some(cache) = &mut self.cache {
            cache.insert(domain, exclusions.clone());
        }

        Ok(exclusions)
    }
}
