//! The crawl engine and its parts
//!
//! This module contains the core crawling machinery:
//! - Request pacing ([`RateLimiter`])
//! - HTTP fetching with typed failure results ([`fetch_page`], [`FetchError`])
//! - Page snapshot extraction ([`PageSnapshot`])
//! - The FIFO frontier with its visited set ([`Frontier`])
//! - The breadth-first crawl loop ([`CrawlEngine`])

mod engine;
mod fetcher;
mod frontier;
mod limiter;
mod page;

pub use engine::{CrawlEngine, CrawlOutcome};
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use frontier::{CrawlTarget, Frontier};
pub use limiter::RateLimiter;
pub use page::PageSnapshot;
