//! Discovered record model, identity, and deduplication
//!
//! A [`Record`] is one normalized unit of discovered compliance or
//! enforcement content. Every record has a stable identity derived from its
//! source and canonical URL, so the same item discovered through different
//! paths, or across separate scrape passes, collapses to a single entry.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;

/// Which scraper role produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Source {
    Site,
    Sec,
    Finra,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Site => "SITE",
            Source::Sec => "SEC",
            Source::Finra => "FINRA",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The concrete type of a discovered record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    CompliancePage,
    LitigationRelease,
    PressRelease,
    AdministrativeProceeding,
    MonthlySummary,
    DisciplinaryDocument,
    EnforcementNews,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::CompliancePage => "compliance_page",
            RecordKind::LitigationRelease => "litigation_release",
            RecordKind::PressRelease => "press_release",
            RecordKind::AdministrativeProceeding => "administrative_proceeding",
            RecordKind::MonthlySummary => "monthly_summary",
            RecordKind::DisciplinaryDocument => "disciplinary_document",
            RecordKind::EnforcementNews => "enforcement_news",
        }
    }

    /// Which of the two export partitions this kind belongs to
    pub fn category(&self) -> RecordCategory {
        match self {
            RecordKind::CompliancePage => RecordCategory::CompliancePage,
            _ => RecordCategory::EnforcementAction,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two exporting partitions of records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordCategory {
    CompliancePage,
    EnforcementAction,
}

/// One normalized unit of discovered compliance/enforcement content
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub source: Source,
    pub kind: RecordKind,

    /// External reference number (release number, notice number); `None`
    /// when the source page carries none
    pub reference: Option<String>,

    pub title: String,
    pub date: Option<String>,

    /// Canonical URL; also half of the record identity
    pub url: String,

    /// Preview text, bounded by the producer
    pub summary: Option<String>,

    /// Distinct matched taxonomy terms, in taxonomy order
    pub tags: Vec<String>,

    pub penalty: Option<String>,
    pub respondents: Vec<String>,
    pub rule_citations: Vec<String>,
}

impl Record {
    /// Stable identity for deduplication
    pub fn identity(&self) -> String {
        record_identity(self.source, &self.url)
    }

    /// Relevance score used for "top N" ordering
    pub fn relevance(&self) -> usize {
        self.tags.len()
    }
}

/// Computes the stable record identity for a (source, canonical URL) pair
///
/// The first twelve hex characters of a SHA-256 digest over
/// `"{source}:{url}"`. Fragments are stripped defensively so URLs differing
/// only by fragment always collapse.
pub fn record_identity(source: Source, url: &str) -> String {
    let canonical = url.split('#').next().unwrap_or(url);
    let mut hasher = Sha256::new();
    hasher.update(source.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(canonical.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..12].to_string()
}

/// Append-only, identity-deduplicated record collection
#[derive(Debug, Default)]
pub struct RecordSet {
    seen: HashSet<String>,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a record unless its identity is already present
    ///
    /// Returns true if the record was newly admitted, false if it was a
    /// duplicate. Applies both within one crawl run and across concatenated
    /// runs merged through [`RecordSet::merge`].
    pub fn admit(&mut self, record: Record) -> bool {
        if self.seen.insert(record.identity()) {
            self.records.push(record);
            true
        } else {
            false
        }
    }

    /// Merges another set into this one, deduplicating across both
    pub fn merge(&mut self, other: RecordSet) {
        for record in other.records {
            self.admit(record);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
