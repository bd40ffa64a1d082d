//! FINRA periodic-summary extraction
//!
//! FINRA publishes disciplinary actions as monthly summary pages on
//! predictable calendar-period URLs, so seeding iterates a bounded set of
//! trailing months instead of following discovered links. Each period page
//! yields one summary record plus a document record per linked disciplinary
//! PDF. The enforcement page additionally links out to newsroom items,
//! which are followed through the frontier and recorded when relevant.

use crate::classify;
use crate::config::FinraConfig;
use crate::crawler::{CrawlTarget, PageSnapshot};
use crate::records::{Record, RecordKind, Source};
use crate::sources::Extraction;
use chrono::{Datelike, Months, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Monthly summary pages live at `<prefix><month>-<year>`
pub const MONTHLY_PATH_PREFIX: &str = "/rules-guidance/rulebooks/monthly-disciplinary-actions-";

/// Enforcement landing page linking to newsroom items
pub const ENFORCEMENT_PATH: &str = "/rules-guidance/enforcement";

/// At most this many newsroom links are followed from the enforcement page
const MAX_NEWS_LINKS: usize = 20;

const PREVIEW_CHARS: usize = 500;

static NEWS_LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/media-center/|/newsroom/").unwrap());

/// Builds seed URLs: one per trailing calendar month, plus the enforcement page
pub fn finra_seed_urls(config: &FinraConfig) -> Result<Vec<Url>, url::ParseError> {
    let base = Url::parse(&config.base_url)?;
    let today = Utc::now().date_naive();

    let mut seeds = Vec::new();
    for i in 0..config.months_back {
        let period = today
            .checked_sub_months(Months::new(i))
            .unwrap_or(today);
        let month_name = period.format("%B").to_string().to_lowercase();
        seeds.push(base.join(&format!(
            "{}{}-{}",
            MONTHLY_PATH_PREFIX,
            month_name,
            period.year()
        ))?);
    }
    seeds.push(base.join(ENFORCEMENT_PATH)?);

    Ok(seeds)
}

pub(crate) fn extract(snapshot: &PageSnapshot) -> Extraction {
    let path = snapshot.url.path();

    if let Some(period) = path.strip_prefix(MONTHLY_PATH_PREFIX) {
        extract_monthly(snapshot, period)
    } else if path == ENFORCEMENT_PATH {
        extract_enforcement_index(snapshot)
    } else if NEWS_LINK_RE.is_match(path) {
        extract_news_detail(snapshot)
    } else {
        Extraction::default()
    }
}

/// Period page: one monthly summary record plus PDF document records
fn extract_monthly(snapshot: &PageSnapshot, period: &str) -> Extraction {
    let period_label = period_label(period);
    let reference = period.split_once('-').map(|(month, year)| {
        format!("{}-{}", capitalize(month), year)
    });

    let mut records = vec![Record {
        source: Source::Finra,
        kind: RecordKind::MonthlySummary,
        reference: reference.clone(),
        title: format!("FINRA Monthly Disciplinary Actions - {}", period_label),
        date: Some(period_label.clone()),
        url: snapshot.url.to_string(),
        summary: Some(snapshot.preview(PREVIEW_CHARS)),
        tags: classify::extract_tags(&snapshot.text),
        penalty: None,
        respondents: Vec::new(),
        rule_citations: classify::extract_rule_citations(&snapshot.text),
    }];

    for link in &snapshot.links {
        let link_path = link.path().to_lowercase();
        if link_path.ends_with(".pdf") && link_path.contains("disciplinary") {
            records.push(Record {
                source: Source::Finra,
                kind: RecordKind::DisciplinaryDocument,
                reference: reference.as_ref().map(|r| format!("PDF-{}", r)),
                title: format!("FINRA Disciplinary Actions PDF - {}", period_label),
                date: Some(period_label.clone()),
                url: link.to_string(),
                summary: Some("Detailed disciplinary action document (PDF)".to_string()),
                tags: Vec::new(),
                penalty: None,
                respondents: Vec::new(),
                rule_citations: Vec::new(),
            });
        }
    }

    Extraction {
        targets: Vec::new(),
        records,
    }
}

/// Enforcement page: newsroom links become crawl targets
fn extract_enforcement_index(snapshot: &PageSnapshot) -> Extraction {
    let targets = snapshot
        .links
        .iter()
        .filter(|url| NEWS_LINK_RE.is_match(url.path()))
        .take(MAX_NEWS_LINKS)
        .cloned()
        .map(|url| CrawlTarget {
            url,
            source: Source::Finra,
        })
        .collect();

    Extraction {
        targets,
        records: Vec::new(),
    }
}

/// Newsroom detail page: recorded when compliance-related
fn extract_news_detail(snapshot: &PageSnapshot) -> Extraction {
    if !classify::is_relevant(&snapshot.text, snapshot.url.as_str()) {
        return Extraction::default();
    }

    let record = Record {
        source: Source::Finra,
        kind: RecordKind::EnforcementNews,
        reference: None,
        title: snapshot
            .title
            .clone()
            .unwrap_or_else(|| "No Title".to_string()),
        date: classify::extract_date(&snapshot.text),
        url: snapshot.url.to_string(),
        summary: Some(snapshot.preview(PREVIEW_CHARS)),
        tags: classify::extract_tags(&snapshot.text),
        penalty: None,
        respondents: Vec::new(),
        rule_citations: classify::extract_rule_citations(&snapshot.text),
    };

    Extraction {
        targets: Vec::new(),
        records: vec![record],
    }
}

/// "july-2026" -> "July 2026"
fn period_label(period: &str) -> String {
    match period.split_once('-') {
        Some((month, year)) => format!("{} {}", capitalize(month), year),
        None => capitalize(period),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(url: &str, html: &str) -> PageSnapshot {
        PageSnapshot::from_html(Url::parse(url).unwrap(), html)
    }

    fn monthly_url(period: &str) -> String {
        format!("https://www.finra.org{}{}", MONTHLY_PATH_PREFIX, period)
    }

    #[test]
    fn test_seed_urls_bounded_by_months_back() {
        let config = FinraConfig {
            base_url: "https://www.finra.org".to_string(),
            months_back: 3,
        };
        let seeds = finra_seed_urls(&config).unwrap();
        // Three period pages plus the enforcement page
        assert_eq!(seeds.len(), 4);
        assert!(seeds[0].path().starts_with(MONTHLY_PATH_PREFIX));
        assert_eq!(seeds[3].path(), ENFORCEMENT_PATH);
    }

    #[test]
    fn test_monthly_page_yields_summary_record() {
        let html = r#"<html><body>
            <p>Firms fined for supervisory failures; FINRA Rule 2010 and Rule 4511 cited.</p>
        </body></html>"#;
        let extraction = extract(&snapshot(&monthly_url("july-2026"), html));
        assert_eq!(extraction.records.len(), 1);

        let record = &extraction.records[0];
        assert_eq!(record.kind, RecordKind::MonthlySummary);
        assert_eq!(record.reference, Some("July-2026".to_string()));
        assert_eq!(
            record.title,
            "FINRA Monthly Disciplinary Actions - July 2026"
        );
        assert_eq!(record.date, Some("July 2026".to_string()));
        assert!(record
            .rule_citations
            .contains(&"FINRA Rule 2010".to_string()));
    }

    #[test]
    fn test_monthly_page_pdf_links_become_documents() {
        let html = r#"<html><body>
            <a href="/sites/default/files/disciplinary-actions-july-2026.pdf">Full PDF</a>
            <a href="/sites/default/files/newsletter.pdf">Unrelated PDF</a>
        </body></html>"#;
        let extraction = extract(&snapshot(&monthly_url("july-2026"), html));
        assert_eq!(extraction.records.len(), 2);

        let doc = &extraction.records[1];
        assert_eq!(doc.kind, RecordKind::DisciplinaryDocument);
        assert_eq!(doc.reference, Some("PDF-July-2026".to_string()));
        assert!(doc.url.ends_with("disciplinary-actions-july-2026.pdf"));
    }

    #[test]
    fn test_monthly_page_yields_no_targets() {
        let html = r#"<html><body><a href="/somewhere">link</a></body></html>"#;
        let extraction = extract(&snapshot(&monthly_url("july-2026"), html));
        assert!(extraction.targets.is_empty());
    }

    #[test]
    fn test_enforcement_page_follows_newsroom_links() {
        let html = r#"<html><body>
            <a href="/media-center/newsreleases/2026/finra-fines-firm">News</a>
            <a href="/rules-guidance/notices/26-07">Notice</a>
        </body></html>"#;
        let extraction = extract(&snapshot(
            "https://www.finra.org/rules-guidance/enforcement",
            html,
        ));
        assert!(extraction.records.is_empty());
        assert_eq!(extraction.targets.len(), 1);
        assert!(extraction.targets[0].url.path().contains("media-center"));
    }

    #[test]
    fn test_news_detail_recorded_when_relevant() {
        let html = r#"<html><head><title>FINRA Fines Firm</title></head><body>
            <p>July 2, 2026. FINRA fined the firm for supervisory and recordkeeping
            violations of FINRA Rule 4511, a books and records failure.</p>
        </body></html>"#;
        let extraction = extract(&snapshot(
            "https://www.finra.org/media-center/newsreleases/2026/finra-fines-firm",
            html,
        ));
        assert_eq!(extraction.records.len(), 1);

        let record = &extraction.records[0];
        assert_eq!(record.kind, RecordKind::EnforcementNews);
        assert_eq!(record.date, Some("July 2, 2026".to_string()));
        assert!(record.rule_citations.contains(&"FINRA Rule 4511".to_string()));
    }

    #[test]
    fn test_unmatched_path_yields_nothing() {
        let html = "<html><body><p>compliance disclosure fraud</p></body></html>";
        let extraction = extract(&snapshot("https://www.finra.org/about", html));
        assert!(extraction.records.is_empty());
        assert!(extraction.targets.is_empty());
    }

    #[test]
    fn test_period_label_formatting() {
        assert_eq!(period_label("july-2026"), "July 2026");
        assert_eq!(period_label("december-2025"), "December 2025");
    }
}
