//! The breadth-first crawl loop
//!
//! One engine drives one scraper role: pull a target from the frontier, pace
//! the request, fetch and snapshot the page, let the source extractor turn it
//! into candidate links and records, screen the links back into the frontier,
//! and deduplicate the records. Per-URL failures are logged and contained;
//! they never abort the run.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::{CrawlTarget, Frontier};
use crate::crawler::limiter::RateLimiter;
use crate::records::RecordSet;
use crate::scope::ScopeFilter;
use crate::sources::SourceExtractor;
use crate::MonitorError;
use reqwest::Client;
use url::Url;

/// Result of one crawl run
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Deduplicated records discovered during the run
    pub records: RecordSet,

    /// Completed fetch attempts, success and failure both counted
    pub pages_fetched: u32,

    /// Fetch attempts that resolved to a `FetchError`
    pub pages_failed: u32,
}

/// Single-flight breadth-first crawler for one scraper role
pub struct CrawlEngine {
    client: Client,
    limiter: RateLimiter,
    scope: ScopeFilter,
    extractor: SourceExtractor,
    frontier: Frontier,
    progress_interval: u32,
}

impl CrawlEngine {
    /// Creates an engine for the given extractor
    ///
    /// Building the HTTP client is the only fallible step; failure here is
    /// an unrecoverable setup error.
    pub fn new(config: &Config, extractor: SourceExtractor) -> Result<Self, MonitorError> {
        let client = build_http_client(&config.user_agent, config.crawler.request_timeout)?;

        Ok(Self {
            client,
            limiter: RateLimiter::new(config.crawler.rate_limit),
            scope: ScopeFilter::new(&config.scope.allowed_domains),
            extractor,
            frontier: Frontier::new(config.crawler.max_pages),
            progress_interval: config.crawler.progress_interval,
        })
    }

    /// Seeds the frontier with starting URLs
    ///
    /// Seeds are scheduled as-is; the scope filter gates discovered links,
    /// not the configured starting set.
    pub fn seed(&mut self, seeds: impl IntoIterator<Item = Url>) {
        let source = self.extractor.source();
        for url in seeds {
            self.frontier.enqueue(CrawlTarget { url, source });
        }
    }

    /// Runs the crawl to completion
    ///
    /// Terminates when the frontier empties or the page budget is spent,
    /// whichever comes first.
    pub async fn run(&mut self) -> CrawlOutcome {
        let mut records = RecordSet::new();
        let mut pages_failed = 0u32;

        tracing::info!(
            "Starting {} crawl: {} seed URLs",
            self.extractor.source(),
            self.frontier.pending_len()
        );

        while let Some(target) = self.frontier.next() {
            self.limiter.wait().await;

            tracing::debug!("Fetching {}", target.url);

            match fetch_page(&self.client, &target.url).await {
                Ok(snapshot) => {
                    let extraction = self.extractor.extract(&snapshot);

                    for candidate in extraction.targets {
                        if self.scope.in_scope(&candidate.url) {
                            self.admit_target(candidate);
                        } else {
                            tracing::debug!("Out of scope: {}", candidate.url);
                        }
                    }

                    for record in extraction.records {
                        let title = record.title.clone();
                        if records.admit(record) {
                            tracing::info!("Found: {}", title);
                        } else {
                            tracing::debug!("Duplicate record: {}", title);
                        }
                    }
                }
                Err(e) => {
                    pages_failed += 1;
                    tracing::warn!("Fetch failed: {}", e);
                }
            }

            self.frontier.record_fetch();

            let completed = self.frontier.fetches_completed();
            if completed % self.progress_interval == 0 {
                tracing::info!(
                    "Progress: {} pages fetched, {} pending, {} records",
                    completed,
                    self.frontier.pending_len(),
                    records.len()
                );
            }
        }

        let pages_fetched = self.frontier.fetches_completed();
        tracing::info!(
            "{} crawl complete: {} pages fetched, {} failed, {} records",
            self.extractor.source(),
            pages_fetched,
            pages_failed,
            records.len()
        );

        CrawlOutcome {
            records,
            pages_fetched,
            pages_failed,
        }
    }

    /// Admits a screened candidate into the frontier
    ///
    /// Re-applies the scope filter before admission; the filter is
    /// idempotent, so an already-screened URL is never rejected here.
    fn admit_target(&mut self, target: CrawlTarget) {
        if self.scope.in_scope(&target.url) {
            self.frontier.enqueue(target);
        }
    }
}
