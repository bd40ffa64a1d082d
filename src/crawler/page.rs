//! Page snapshot extraction
//!
//! A [`PageSnapshot`] is the cleaned view of one fetched page: title, meta
//! description, boilerplate-free body text, and normalized outbound links.
//! Script, style, nav, footer, and header subtrees are detached from the
//! parse tree before text and link extraction, so navigation chrome neither
//! pollutes keyword matching nor re-enters the frontier.

use crate::scope::normalize_link;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Result of fetching and parsing one URL
///
/// Immutable once produced; consumed by the classifier and the source
/// extractor, then discarded unless it yields a record.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// Canonical URL of the fetched page (after redirects)
    pub url: Url,

    /// Contents of `<title>`, if present and non-empty
    pub title: Option<String>,

    /// Contents of `<meta name="description">`, if present
    pub description: Option<String>,

    /// Whitespace-normalized body text with boilerplate regions removed
    pub text: String,

    /// Deduplicated, normalized outbound links
    pub links: Vec<Url>,

    /// Character length of the cleaned text
    pub content_length: usize,
}

impl PageSnapshot {
    /// Parses raw HTML into a snapshot
    ///
    /// Malformed HTML degrades rather than fails: a page with no usable
    /// title or content produces `None`/empty fields.
    pub fn from_html(url: Url, html: &str) -> Self {
        let mut document = Html::parse_document(html);

        strip_boilerplate(&mut document);

        let title = extract_title(&document);
        let description = extract_description(&document);
        let text = extract_text(&document);
        let links = extract_links(&document, &url);
        let content_length = text.chars().count();

        Self {
            url,
            title,
            description,
            text,
            links,
            content_length,
        }
    }

    /// First `limit` characters of the cleaned text, ellipsized when cut
    pub fn preview(&self, limit: usize) -> String {
        if self.content_length > limit {
            let cut: String = self.text.chars().take(limit).collect();
            format!("{}...", cut)
        } else {
            self.text.clone()
        }
    }
}

/// Detaches non-content subtrees from the parse tree
fn strip_boilerplate(document: &mut Html) {
    let Ok(selector) = Selector::parse("script, style, nav, footer, header") else {
        return;
    };

    let ids: Vec<_> = document.select(&selector).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn extract_description(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn extract_text(document: &Html) -> String {
    document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_links(document: &Html, base: &Url) -> Vec<Url> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(resolved) = normalize_link(href, base) {
                if seen.insert(resolved.to_string()) {
                    links.push(resolved);
                }
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    #[test]
    fn test_title_extracted() {
        let html = "<html><head><title>  Compliance Center  </title></head><body></body></html>";
        let snapshot = PageSnapshot::from_html(base(), html);
        assert_eq!(snapshot.title, Some("Compliance Center".to_string()));
    }

    #[test]
    fn test_missing_title_is_none() {
        let html = "<html><head></head><body>text</body></html>";
        let snapshot = PageSnapshot::from_html(base(), html);
        assert_eq!(snapshot.title, None);
    }

    #[test]
    fn test_meta_description_extracted() {
        let html = r#"<html><head><meta name="description" content="Our policies"></head><body></body></html>"#;
        let snapshot = PageSnapshot::from_html(base(), html);
        assert_eq!(snapshot.description, Some("Our policies".to_string()));
    }

    #[test]
    fn test_body_text_whitespace_normalized() {
        let html = "<html><body><p>first\n\n   second</p><p>third</p></body></html>";
        let snapshot = PageSnapshot::from_html(base(), html);
        assert_eq!(snapshot.text, "first second third");
    }

    #[test]
    fn test_script_and_style_stripped() {
        let html = r#"<html><body>
            <script>var compliance = "fraud";</script>
            <style>.legal { color: red; }</style>
            <p>visible</p>
        </body></html>"#;
        let snapshot = PageSnapshot::from_html(base(), html);
        assert_eq!(snapshot.text, "visible");
    }

    #[test]
    fn test_nav_footer_header_stripped() {
        let html = r#"<html><body>
            <header><a href="/home">Home</a></header>
            <nav><a href="/nav-target">Navigate</a></nav>
            <p>main content</p>
            <footer><a href="/legal">Legal</a> footer text</footer>
        </body></html>"#;
        let snapshot = PageSnapshot::from_html(base(), html);
        assert_eq!(snapshot.text, "main content");
        assert!(snapshot.links.is_empty());
    }

    #[test]
    fn test_links_resolved_against_base() {
        let html = r#"<html><body><a href="/a">A</a><a href="b">B</a></body></html>"#;
        let snapshot = PageSnapshot::from_html(base(), html);
        let links: Vec<_> = snapshot.links.iter().map(|u| u.as_str()).collect();
        assert_eq!(links, vec!["https://example.com/a", "https://example.com/b"]);
    }

    #[test]
    fn test_links_deduplicated() {
        let html = r#"<html><body>
            <a href="/a">first</a>
            <a href="/a#section">same after normalization</a>
            <a href="https://example.com/a">same again</a>
        </body></html>"#;
        let snapshot = PageSnapshot::from_html(base(), html);
        assert_eq!(snapshot.links.len(), 1);
    }

    #[test]
    fn test_untraversable_links_dropped() {
        let html = r##"<html><body>
            <a href="javascript:void(0)">js</a>
            <a href="mailto:x@example.com">mail</a>
            <a href="#top">anchor</a>
        </body></html>"##;
        let snapshot = PageSnapshot::from_html(base(), html);
        assert!(snapshot.links.is_empty());
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let body = "word ".repeat(200);
        let html = format!("<html><body><p>{}</p></body></html>", body);
        let snapshot = PageSnapshot::from_html(base(), &html);
        let preview = snapshot.preview(500);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 503);
    }

    #[test]
    fn test_preview_short_text_untouched() {
        let html = "<html><body><p>short text</p></body></html>";
        let snapshot = PageSnapshot::from_html(base(), html);
        assert_eq!(snapshot.preview(500), "short text");
    }

    #[test]
    fn test_malformed_html_degrades() {
        let html = "<html><body><p>unclosed <div>nested";
        let snapshot = PageSnapshot::from_html(base(), html);
        assert!(snapshot.text.contains("unclosed"));
        assert_eq!(snapshot.title, None);
    }
}
