//! Compliance-Monitor: a regulatory content crawler
//!
//! This crate implements a web crawler that discovers compliance and
//! enforcement related content on a small set of target sites (an investment
//! firm's public pages plus the SEC and FINRA regulator sites), classifies it
//! against a keyword taxonomy, and exports matched records.

pub mod classify;
pub mod config;
pub mod crawler;
pub mod export;
pub mod records;
pub mod scope;
pub mod sources;

use thiserror::Error;

/// Main error type for compliance-monitor operations
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid domain pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for compliance-monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlEngine, CrawlOutcome, FetchError, PageSnapshot};
pub use records::{Record, RecordKind, RecordSet, Source};
pub use scope::{normalize_link, ScopeFilter};
pub use sources::SourceExtractor;
