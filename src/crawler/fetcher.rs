//! HTTP fetcher implementation
//!
//! Builds the HTTP client used for both page and robots.txt requests and
//! performs page fetches. Page fetches carry a per-request timeout; the
//! client itself has no global timeout, so robots.txt requests block for as
//! long as the host takes to answer.

use crate::config::UserAgentConfig;
use reqwest::{Client, Response};
use std::time::Duration;
use thiserror::Error;

/// A page fetch that did not produce a usable response
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request completed at the protocol level with a 4xx/5xx status
    #[error("HTTP status {code}")]
    HttpStatus { code: u16 },

    /// The request failed below the protocol level (timeout, DNS, connect)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Builds the HTTP client with the configured user agent
///
/// Format: `CrawlerName/Version (+ContactURL; ContactEmail)`
///
/// # Example
///
/// ```no_run
/// use kahu::config::UserAgentConfig;
/// use kahu::crawler::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "Kahu".to_string(),
///     crawler_version: "1.0".to_string(),
///     contact_url: "https://example.nz/about".to_string(),
///     contact_email: "admin@example.nz".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page, classifying protocol-level errors
///
/// Redirects are followed. A 4xx/5xx response becomes
/// [`FetchError::HttpStatus`]; transport failures (including the timeout)
/// become [`FetchError::Transport`]. The response body is not read here, so
/// the caller can run its remaining gates before committing to the download.
pub async fn fetch_page(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<Response, FetchError> {
    let response = client.get(url).timeout(timeout).send().await?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(FetchError::HttpStatus {
            code: status.as_u16(),
        });
    }

    Ok(response)
}

/// Extracts the Content-Type header from a response, empty when absent
pub fn content_type_of(response: &Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}
