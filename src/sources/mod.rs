//! Source-specific extraction strategies
//!
//! Each target site publishes its content differently: the firm site is a
//! plain page graph, the SEC lists releases behind a release-number URL
//! scheme, and FINRA publishes monthly disciplinary summaries on
//! calendar-period URLs. The differences live entirely in this module as a
//! closed set of pattern families behind one interface; rate limiting and
//! scope filtering stay in the shared engine.

mod finra;
mod sec;
mod site;

pub use finra::finra_seed_urls;
pub use sec::sec_seed_urls;

use crate::crawler::{CrawlTarget, PageSnapshot};
use crate::records::{Record, Source};

/// Candidate links and records produced from one page snapshot
#[derive(Debug, Default)]
pub struct Extraction {
    pub targets: Vec<CrawlTarget>,
    pub records: Vec<Record>,
}

/// The pattern family for one scraper role
///
/// Selected once per crawl run; the engine dispatches every snapshot through
/// the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceExtractor {
    /// Generic site crawl: follow everything in scope, record relevant pages
    Site,

    /// SEC structured release lists: index pages yield detail links, detail
    /// pages yield one record per release
    Sec,

    /// FINRA calendar periods: monthly summary pages plus enforcement news
    Finra,
}

impl SourceExtractor {
    /// The record source this extractor produces
    pub fn source(&self) -> Source {
        match self {
            SourceExtractor::Site => Source::Site,
            SourceExtractor::Sec => Source::Sec,
            SourceExtractor::Finra => Source::Finra,
        }
    }

    /// Turns a fetched page into candidate targets and records
    pub fn extract(&self, snapshot: &PageSnapshot) -> Extraction {
        match self {
            SourceExtractor::Site => site::extract(snapshot),
            SourceExtractor::Sec => sec::extract(snapshot),
            SourceExtractor::Finra => finra::extract(snapshot),
        }
    }
}
