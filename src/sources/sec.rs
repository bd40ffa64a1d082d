//! SEC structured release-list extraction
//!
//! The SEC publishes litigation releases, administrative proceedings, and
//! press releases as year-filtered index pages whose entries follow
//! release-number URL schemes. Index pages yield the matching detail links
//! as crawl targets — the secondary detail fetch flows through the shared
//! frontier — and each detail page yields one record.

use crate::classify;
use crate::config::SecConfig;
use crate::crawler::{CrawlTarget, PageSnapshot};
use crate::records::{Record, RecordKind, Source};
use crate::sources::Extraction;
use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Index-page paths, filtered by year at seed time
pub const LITIGATION_PATH: &str = "/enforcement-litigation/litigation-releases";
pub const ADMIN_PATH: &str = "/enforcement-litigation/administrative-proceedings";
pub const PRESS_PATH: &str = "/newsroom/press-releases";

const PREVIEW_CHARS: usize = 500;

static LITIGATION_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/litigation-releases/lr-\d+|/litigation/litreleases/").unwrap());

static ADMIN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/administrative-proceedings/.|/litigation/admin/").unwrap());

static PRESS_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/press-releases?/\d{4}-\d+").unwrap());

static LITIGATION_NUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)lr[- ]?(\d+)").unwrap());

static PRESS_NUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4}-\d+)").unwrap());

static ADMIN_NUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(ia-\d+|33-\d+|34-\d+)").unwrap());

/// Builds the year-filtered index-page seed URLs
///
/// One seed per (year, endpoint) pair from the configured start year
/// through the current year.
pub fn sec_seed_urls(config: &SecConfig) -> Result<Vec<Url>, url::ParseError> {
    let base = Url::parse(&config.base_url)?;
    let current_year = chrono::Utc::now().year();

    let mut seeds = Vec::new();
    for year in config.start_year..=current_year {
        for path in [LITIGATION_PATH, ADMIN_PATH, PRESS_PATH] {
            let mut url = base.join(path)?;
            url.set_query(Some(&format!("year={}&month=All", year)));
            seeds.push(url);
        }
    }

    Ok(seeds)
}

pub(crate) fn extract(snapshot: &PageSnapshot) -> Extraction {
    match detail_kind(snapshot.url.path()) {
        Some(kind) => extract_detail(snapshot, kind),
        None => extract_index(snapshot),
    }
}

/// Classifies a path into its release family, if it is a detail page
fn detail_kind(path: &str) -> Option<RecordKind> {
    if LITIGATION_LINK_RE.is_match(path) {
        Some(RecordKind::LitigationRelease)
    } else if ADMIN_LINK_RE.is_match(path) {
        Some(RecordKind::AdministrativeProceeding)
    } else if PRESS_LINK_RE.is_match(path) {
        Some(RecordKind::PressRelease)
    } else {
        None
    }
}

/// Index page: the matching release links become crawl targets
fn extract_index(snapshot: &PageSnapshot) -> Extraction {
    let targets = snapshot
        .links
        .iter()
        .filter(|url| detail_kind(url.path()).is_some())
        .cloned()
        .map(|url| CrawlTarget {
            url,
            source: Source::Sec,
        })
        .collect();

    Extraction {
        targets,
        records: Vec::new(),
    }
}

/// Detail page: one record per release
fn extract_detail(snapshot: &PageSnapshot, kind: RecordKind) -> Extraction {
    // Press releases cover far more than enforcement; only keep the
    // compliance-related ones. Litigation and administrative releases are
    // enforcement by definition and are always recorded.
    if kind == RecordKind::PressRelease
        && classify::count_matches(&snapshot.text) < classify::MIN_BODY_MATCHES
    {
        return Extraction::default();
    }

    let title = snapshot
        .title
        .clone()
        .unwrap_or_else(|| "No Title".to_string());
    let reference = release_number(kind, &title, snapshot.url.as_str());

    let record = Record {
        source: Source::Sec,
        kind,
        reference,
        title,
        date: classify::extract_date(&snapshot.text),
        url: snapshot.url.to_string(),
        summary: Some(snapshot.preview(PREVIEW_CHARS)),
        tags: classify::extract_tags(&snapshot.text),
        penalty: classify::extract_penalty(&snapshot.text),
        respondents: Vec::new(),
        rule_citations: Vec::new(),
    };

    Extraction {
        targets: Vec::new(),
        records: vec![record],
    }
}

/// Parses the release number from title and URL; absent numbers stay `None`
fn release_number(kind: RecordKind, title: &str, url: &str) -> Option<String> {
    match kind {
        RecordKind::LitigationRelease => {
            let haystack = format!("{} {}", title, url);
            LITIGATION_NUM_RE
                .captures(&haystack)
                .map(|c| format!("LR-{}", &c[1]))
        }
        RecordKind::PressRelease => PRESS_NUM_RE.captures(url).map(|c| c[1].to_string()),
        RecordKind::AdministrativeProceeding => {
            ADMIN_NUM_RE.captures(url).map(|c| c[1].to_uppercase())
        }
        _ => None,
    }
}
