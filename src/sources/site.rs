//! Generic firm-site extraction
//!
//! Every outbound link is a candidate target (the engine screens them for
//! scope), and the page itself becomes a compliance-page record exactly when
//! the classifier marks it relevant.

use crate::classify;
use crate::crawler::{CrawlTarget, PageSnapshot};
use crate::records::{Record, RecordKind, Source};
use crate::sources::Extraction;

/// Preview length carried on compliance-page records
const PREVIEW_CHARS: usize = 500;

pub(crate) fn extract(snapshot: &PageSnapshot) -> Extraction {
    let targets = snapshot
        .links
        .iter()
        .cloned()
        .map(|url| CrawlTarget {
            url,
            source: Source::Site,
        })
        .collect();

    let mut records = Vec::new();
    if classify::is_relevant(&snapshot.text, snapshot.url.as_str()) {
        records.push(Record {
            source: Source::Site,
            kind: RecordKind::CompliancePage,
            reference: None,
            title: snapshot
                .title
                .clone()
                .unwrap_or_else(|| "No Title".to_string()),
            date: None,
            url: snapshot.url.to_string(),
            summary: Some(snapshot.preview(PREVIEW_CHARS)),
            tags: classify::extract_tags(&snapshot.text),
            penalty: None,
            respondents: Vec::new(),
            rule_citations: Vec::new(),
        });
    }

    Extraction { targets, records }
}
