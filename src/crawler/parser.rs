//! HTML link extraction
//!
//! Pulls candidate URLs out of a fetched page. Every anchor with an `href`
//! contributes one entry: absolute `http`/`https` hrefs pass through
//! verbatim, and everything else is resolved against the site root
//! (`{scheme}://{domain}`), not against the page the link appeared on. Each
//! call returns a fresh vector of owned strings.

use scraper::{Html, Selector};
use url::Url;

/// Extracts hyperlinks from an HTML body
///
/// # Arguments
///
/// * `html` - The page content
/// * `scheme` - Scheme of the page's site, used as the resolution base
/// * `domain` - Domain of the page's site, used as the resolution base
///
/// # Returns
///
/// Absolute URL strings in document order, duplicates included; the caller
/// deduplicates.
pub fn extract_links(html: &str, scheme: &str, domain: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    let Ok(selector) = Selector::parse("a[href]") else {
        return links;
    };

    let base = Url::parse(&format!("{}://{}", scheme, domain)).ok();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            links.push(resolve_href(href, base.as_ref()));
        }
    }

    links
}

/// Resolves an href against the site root
///
/// Hrefs already carrying an http(s) prefix are kept verbatim. An href that
/// cannot be resolved (no usable base, or a join failure) is kept as-is; it
/// will construct a task with an empty domain and fall to the domain gate.
fn resolve_href(href: &str, base: Option<&Url>) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    match base {
        Some(base) => base
            .join(href)
            .map(|resolved| resolved.to_string())
            .unwrap_or_else(|_| href.to_string()),
        None => href.to_string(),
    }
}
