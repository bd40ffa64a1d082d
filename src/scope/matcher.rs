/// Checks whether a host matches an allow-list pattern
///
/// Two pattern forms are supported:
/// 1. Exact: `"example.com"` matches only `"example.com"`
/// 2. Wildcard: `"*.example.com"` matches the bare domain and any subdomain
///    (`"example.com"`, `"investor.example.com"`, `"a.b.example.com"`)
///
/// Hosts are expected to be lowercase already; the comparison itself is
/// case-sensitive.
pub fn domain_matches(pattern: &str, host: &str) -> bool {
    if let Some(base) = pattern.strip_prefix("*.") {
        host == base || host.ends_with(&format!(".{}", base))
    } else {
        host == pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(domain_matches("example.com", "example.com"));
        assert!(!domain_matches("example.com", "other.com"));
        assert!(!domain_matches("example.com", "sub.example.com"));
    }

    #[test]
    fn test_wildcard_matches_bare_domain() {
        assert!(domain_matches("*.example.com", "example.com"));
    }

    #[test]
    fn test_wildcard_matches_subdomains() {
        assert!(domain_matches("*.example.com", "investor.example.com"));
        assert!(domain_matches("*.example.com", "a.b.example.com"));
    }

    #[test]
    fn test_wildcard_rejects_lookalikes() {
        assert!(!domain_matches("*.example.com", "notexample.com"));
        assert!(!domain_matches("*.example.com", "example.com.evil.net"));
        assert!(!domain_matches("*.example.com", "example.org"));
    }

    #[test]
    fn test_empty_host() {
        assert!(!domain_matches("*.example.com", ""));
        assert!(!domain_matches("example.com", ""));
    }
}
