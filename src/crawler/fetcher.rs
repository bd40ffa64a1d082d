//! HTTP fetching with typed failure results
//!
//! Every fetch resolves to either a [`PageSnapshot`] or a [`FetchError`];
//! failures are values the caller branches on, never exceptions that unwind
//! through the crawl loop.

use crate::config::UserAgentConfig;
use crate::crawler::page::PageSnapshot;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Typed fetch failures
///
/// Any of these marks the URL as attempted; none of them aborts the crawl.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Transport error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },
}

/// Builds the HTTP client used for one crawl engine
///
/// The client carries the identifying user-agent string and bounded
/// timeouts. Failure here is an unrecoverable setup error.
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    request_timeout: u64,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(request_timeout))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one URL and produces a page snapshot
///
/// Issues a single GET; non-2xx statuses and transport failures become
/// [`FetchError`] variants. There is no retry: a failed URL is abandoned by
/// the caller.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<PageSnapshot, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().clone();
    let body = response
        .text()
        .await
        .map_err(|e| classify_error(url, e))?;

    Ok(PageSnapshot::from_html(final_url, &body))
}

fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_agent() -> UserAgentConfig {
        UserAgentConfig {
            name: "TestMonitor".to_string(),
            version: "0.1".to_string(),
            contact: "test@example.com".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&test_user_agent(), 30);
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_header_value() {
        let ua = test_user_agent();
        assert_eq!(
            ua.header_value(),
            "TestMonitor/0.1 (compatible; test@example.com)"
        );
    }

    // Fetch behavior against live responses is covered by the wiremock
    // integration tests.
}
