//! Request pacing

use std::time::Duration;
use tokio::time::Instant;

/// Enforces a minimum interval between consecutive requests
///
/// `wait()` returns once at least `1/rate` seconds have passed since the
/// previous call returned. One instance paces one crawl engine; concurrent
/// engines (one per scraper role) pace independently. This operation cannot
/// fail, only delay.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Creates a limiter targeting the given request rate in requests/second
    pub fn new(requests_per_second: f64) -> Self {
        Self {
            min_interval: Duration::from_secs_f64(1.0 / requests_per_second),
            last_request: None,
        }
    }

    /// Blocks until the minimum interval since the previous call has elapsed
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}
