//! Exclusion-directive parsing
//!
//! Interprets `Disallow:` lines from a site's robots.txt into the exclusion
//! entries the politeness gate matches against. The interpretation is the
//! crawler's own, not the robots exclusion standard:
//!
//! - an empty path is skipped;
//! - a path beginning with `/` is skipped and contributes no exclusion;
//! - a trailing `*` is stripped;
//! - the remaining path is appended directly to `{scheme}://{domain}` with
//!   no separator.
//!
//! Matching is by substring, not by path prefix.

/// Builds the exclusion list from raw robots.txt content
///
/// # Arguments
///
/// * `content` - The raw robots.txt file content
/// * `scheme` - Scheme of the site the file was fetched from
/// * `domain` - Domain of the site the file was fetched from
///
/// # Returns
///
/// Exclusion entries, one per qualifying `Disallow:` line
pub fn parse_exclusions(content: &str, scheme: &str, domain: &str) -> Vec<String> {
    let mut excluded = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("Disallow:") else {
            continue;
        };

        let mut path = rest.trim();
        if path.is_empty() {
            continue;
        }
        // Root-relative paths contribute no exclusion entry
        if path.starts_with('/') {
            continue;
        }
        if let Some(stripped) = path.strip_suffix('*') {
            path = stripped;
        }

        excluded.push(format!("{}://{}{}", scheme, domain, path));
    }

    excluded
}

/// Checks a URL against an exclusion list
///
/// Returns false when the URL contains any exclusion entry as a substring,
/// true otherwise.
pub fn is_allowed(url: &str, exclusions: &[String]) -> bool {
    !exclusions.iter().any(|excluded| url.contains(excluded.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_relative_disallow_is_skipped() {
        let content = "User-agent: *\nDisallow: /private";
        let exclusions = parse_exclusions(content, "http", "example.nz");
        assert!(exclusions.is_empty());
    }

    #[test]
    fn test_bare_path_is_excluded() {
        let content = "Disallow: private";
        let exclusions = parse_exclusions(content, "http", "example.nz");
        assert_eq!(exclusions, vec!["http://example.nzprivate".to_string()]);
    }

    #[test]
    fn test_trailing_star_is_stripped() {
        let content = "Disallow: private*";
        let exclusions = parse_exclusions(content, "http", "example.nz");
        assert_eq!(exclusions, vec!["http://example.nzprivate".to_string()]);
    }

    #[test]
    fn test_empty_path_is_skipped() {
        let content = "Disallow:\nDisallow:   ";
        let exclusions = parse_exclusions(content, "http", "example.nz");
        assert!(exclusions.is_empty());
    }

    #[test]
    fn test_mixed_directives() {
        let content = "User-agent: *\nDisallow: /admin\nDisallow: cgi-bin*\nAllow: /public\nDisallow: tmp";
        let exclusions = parse_exclusions(content, "https", "example.nz");
        assert_eq!(
            exclusions,
            vec![
                "https://example.nzcgi-bin".to_string(),
                "https://example.nztmp".to_string(),
            ]
        );
    }

    #[test]
    fn test_indented_disallow_lines_are_parsed() {
        let content = "  Disallow: secret";
        let exclusions = parse_exclusions(content, "http", "example.nz");
        assert_eq!(exclusions, vec!["http://example.nzsecret".to_string()]);
    }

    #[test]
    fn test_empty_content_yields_no_exclusions() {
        assert!(parse_exclusions("", "http", "example.nz").is_empty());
    }

    #[test]
    fn test_is_allowed_with_no_exclusions() {
        assert!(is_allowed("http://example.nz/anything", &[]));
    }

    #[test]
    fn test_is_allowed_substring_match() {
        let exclusions = vec!["http://example.nztmp".to_string()];
        assert!(!is_allowed("http://example.nztmp/file", &exclusions));
        assert!(is_allowed("http://example.nz/other", &exclusions));
    }

    #[test]
    fn test_is_allowed_matches_anywhere_in_url() {
        // Substring semantics: the entry can match mid-URL, not just at the start
        let exclusions = vec!["nzprivate".to_string()];
        assert!(!is_allowed("http://example.nzprivate/page", &exclusions));
    }
}
