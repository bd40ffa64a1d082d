//! URL canonicalization and crawl scope filtering
//!
//! This module decides which discovered hyperlinks are eligible for the
//! frontier: links are first normalized to canonical absolute form, then
//! screened against the domain allow-list, known non-content file
//! extensions, and authenticated-area path patterns.

mod matcher;
mod normalize;

pub use matcher::domain_matches;
pub use normalize::normalize_link;

use url::Url;

/// File extensions that never hold crawlable page content
const SKIP_EXTENSIONS: &[&str] = &[
    ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".svg", ".ico", ".css", ".js", ".zip", ".tar", ".gz",
    ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx",
];

/// Path substrings associated with authenticated or account areas
const SKIP_PATH_PATTERNS: &[&str] = &[
    "/login",
    "/signin",
    "/signout",
    "/logout",
    "/account",
    "/my-account",
    "/secure",
];

/// Decides crawl eligibility for canonical URLs
///
/// The filter is the sole gate between a discovered link and a frontier
/// candidate, and it is idempotent: reapplying it to a URL it has already
/// admitted never rejects it.
#[derive(Debug, Clone)]
pub struct ScopeFilter {
    allowed_domains: Vec<String>,
}

impl ScopeFilter {
    /// Creates a filter from an allow-list of domain patterns
    ///
    /// Patterns use the same wildcard form as the configuration:
    /// `"example.com"` for an exact host, `"*.example.com"` for the host and
    /// all of its subdomains.
    pub fn new(allowed_domains: &[String]) -> Self {
        Self {
            allowed_domains: allowed_domains.to_vec(),
        }
    }

    /// Returns true if the URL may be fetched
    pub fn in_scope(&self, url: &Url) -> bool {
        let host = match url.host_str() {
            Some(h) => h.to_lowercase(),
            None => return false,
        };

        if !self
            .allowed_domains
            .iter()
            .any(|pattern| domain_matches(pattern, &host))
        {
            return false;
        }

        let path = url.path().to_lowercase();

        if SKIP_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            return false;
        }

        if SKIP_PATH_PATTERNS.iter().any(|pat| path.contains(pat)) {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> ScopeFilter {
        ScopeFilter::new(&["*.example.com".to_string(), "other.org".to_string()])
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_allowed_domain_in_scope() {
        assert!(filter().in_scope(&url("https://example.com/page")));
        assert!(filter().in_scope(&url("https://investor.example.com/page")));
        assert!(filter().in_scope(&url("https://other.org/")));
    }

    #[test]
    fn test_foreign_domain_rejected() {
        assert!(!filter().in_scope(&url("https://unrelated.com/page")));
        assert!(!filter().in_scope(&url("https://sub.other.org/page")));
    }

    #[test]
    fn test_non_content_extensions_rejected() {
        assert!(!filter().in_scope(&url("https://example.com/report.pdf")));
        assert!(!filter().in_scope(&url("https://example.com/logo.PNG")));
        assert!(!filter().in_scope(&url("https://example.com/app.js")));
        assert!(!filter().in_scope(&url("https://example.com/archive.zip")));
    }

    #[test]
    fn test_account_paths_rejected() {
        assert!(!filter().in_scope(&url("https://example.com/login")));
        assert!(!filter().in_scope(&url("https://example.com/my-account/settings")));
        assert!(!filter().in_scope(&url("https://example.com/secure/dashboard")));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let f = filter();
        let admitted = url("https://example.com/compliance/policy");
        assert!(f.in_scope(&admitted));
        assert!(f.in_scope(&admitted));
    }

    #[test]
    fn test_host_case_insensitive() {
        assert!(filter().in_scope(&url("https://EXAMPLE.com/page")));
    }
}
