//! URL handling for Kahu
//!
//! Scheme and domain derivation for crawl tasks. Derivation is deliberately
//! lenient: a malformed or empty URL string yields empty components instead of
//! an error, so that such entries flow through the pipeline and are dropped by
//! the domain gate rather than aborting the crawl.

use url::Url;

/// Splits a URL string into its scheme and domain.
///
/// The domain is the lowercased host with the port appended when one is
/// present (`example.nz` or `example.nz:8080`), matching what the robots and
/// domain-gate checks operate on.
///
/// # Examples
///
/// ```
/// use kahu::url::split_scheme_domain;
///
/// assert_eq!(
///     split_scheme_domain("http://example.nz/path"),
///     ("http".to_string(), "example.nz".to_string())
/// );
/// assert_eq!(split_scheme_domain(""), (String::new(), String::new()));
/// ```
pub fn split_scheme_domain(url: &str) -> (String, String) {
    match Url::parse(url) {
        Ok(parsed) => {
            let scheme = parsed.scheme().to_string();
            let domain = match (parsed.host_str(), parsed.port()) {
                (Some(host), Some(port)) => format!("{}:{}", host.to_lowercase(), port),
                (Some(host), None) => host.to_lowercase(),
                (None, _) => String::new(),
            };
            (scheme, domain)
        }
        Err(_) => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_url() {
        let (scheme, domain) = split_scheme_domain("http://example.nz/page");
        assert_eq!(scheme, "http");
        assert_eq!(domain, "example.nz");
    }

    #[test]
    fn test_split_https_with_port() {
        let (scheme, domain) = split_scheme_domain("https://example.nz:8443/");
        assert_eq!(scheme, "https");
        assert_eq!(domain, "example.nz:8443");
    }

    #[test]
    fn test_split_uppercase_host_lowercased() {
        let (_, domain) = split_scheme_domain("http://EXAMPLE.NZ/");
        assert_eq!(domain, "example.nz");
    }

    #[test]
    fn test_split_empty_string() {
        assert_eq!(split_scheme_domain(""), (String::new(), String::new()));
    }

    #[test]
    fn test_split_garbage() {
        assert_eq!(
            split_scheme_domain("not a url at all"),
            (String::new(), String::new())
        );
    }

    #[test]
    fn test_split_mailto_has_no_domain() {
        let (scheme, domain) = split_scheme_domain("mailto:someone@example.nz");
        assert_eq!(scheme, "mailto");
        assert_eq!(domain, "");
    }

    #[test]
    fn test_split_ip_with_port() {
        let (scheme, domain) = split_scheme_domain("http://127.0.0.1:8080/index.html");
        assert_eq!(scheme, "http");
        assert_eq!(domain, "127.0.0.1:8080");
    }
}
