use url::Url;

/// Normalizes a discovered href to canonical absolute form
///
/// Resolution handles relative, absolute, and protocol-relative hrefs
/// against the page's own URL. Canonicalization strips the fragment, since
/// two URLs differing only by fragment identify the same document for both
/// visitation and record identity.
///
/// Returns `None` for untraversable input:
/// - empty or fragment-only hrefs
/// - `javascript:`, `mailto:`, `tel:`, `data:` schemes
/// - hrefs that fail to resolve, or resolve to a non-http(s) scheme
pub fn normalize_link(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let mut resolved = base.join(href).ok()?;

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    resolved.set_fragment(None);

    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/section/page").unwrap()
    }

    #[test]
    fn test_absolute_href() {
        let url = normalize_link("https://other.com/doc", &base()).unwrap();
        assert_eq!(url.as_str(), "https://other.com/doc");
    }

    #[test]
    fn test_root_relative_href() {
        let url = normalize_link("/compliance", &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/compliance");
    }

    #[test]
    fn test_relative_href() {
        let url = normalize_link("detail", &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/section/detail");
    }

    #[test]
    fn test_protocol_relative_href() {
        let url = normalize_link("//cdn.example.com/page", &base()).unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/page");
    }

    #[test]
    fn test_fragment_stripped() {
        let url = normalize_link("/page#section-3", &base()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_fragment_only_rejected() {
        assert!(normalize_link("#top", &base()).is_none());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(normalize_link("", &base()).is_none());
        assert!(normalize_link("   ", &base()).is_none());
    }

    #[test]
    fn test_special_schemes_rejected() {
        assert!(normalize_link("javascript:void(0)", &base()).is_none());
        assert!(normalize_link("mailto:help@example.com", &base()).is_none());
        assert!(normalize_link("tel:+15551234567", &base()).is_none());
        assert!(normalize_link("data:text/html,<p>x</p>", &base()).is_none());
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_link("/page#x", &base()).unwrap();
        let twice = normalize_link(once.as_str(), &base()).unwrap();
        assert_eq!(once, twice);
    }
}
