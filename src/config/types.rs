use serde::Deserialize;

/// Main configuration structure for compliance-monitor
///
/// Every section has production defaults, so the binary can run without a
/// configuration file at all; a TOML file overrides sections selectively.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    pub scope: ScopeConfig,
    pub site: SiteConfig,
    pub sec: SecConfig,
    pub finra: FinraConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawler: CrawlerConfig::default(),
            user_agent: UserAgentConfig::default(),
            output: OutputConfig::default(),
            scope: ScopeConfig::default(),
            site: SiteConfig::default(),
            sec: SecConfig::default(),
            finra: FinraConfig::default(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Target request rate in requests per second
    #[serde(rename = "rate-limit")]
    pub rate_limit: f64,

    /// Maximum number of completed fetch attempts per crawl run
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Emit a progress line every N completed fetches
    #[serde(rename = "progress-interval")]
    pub progress_interval: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            rate_limit: 1.0,
            max_pages: 500,
            request_timeout: 30,
            progress_interval: 50,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    pub name: String,

    /// Version of the crawler
    pub version: String,

    /// Contact address included in the user-agent string
    pub contact: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "ComplianceMonitor".to_string(),
            version: "1.0".to_string(),
            contact: "compliance-research@example.com".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the full user-agent header value
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (compatible; {})",
            self.name, self.version, self.contact
        )
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory all export files are written into
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "compliance_data".to_string(),
        }
    }
}

/// Crawl scope configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Domain patterns eligible for crawling ("example.com" or "*.example.com")
    #[serde(rename = "allowed-domains")]
    pub allowed_domains: Vec<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            allowed_domains: vec![
                "*.vanguard.com".to_string(),
                "*.sec.gov".to_string(),
                "*.finra.org".to_string(),
            ],
        }
    }
}

/// Generic firm-site crawl configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Seed URLs the breadth-first crawl starts from
    pub seeds: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            seeds: vec![
                "https://investor.vanguard.com".to_string(),
                "https://investor.vanguard.com/corporate-portal".to_string(),
                "https://investor.vanguard.com/investor-resources-education".to_string(),
                "https://corporate.vanguard.com".to_string(),
            ],
        }
    }
}

/// SEC release-list scrape configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecConfig {
    /// Base URL of the SEC site
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// First year of release listings to cover
    #[serde(rename = "start-year")]
    pub start_year: i32,
}

impl Default for SecConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.sec.gov".to_string(),
            start_year: 2020,
        }
    }
}

/// FINRA monthly disciplinary-action scrape configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FinraConfig {
    /// Base URL of the FINRA site
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Number of trailing calendar months to cover
    #[serde(rename = "months-back")]
    pub months_back: u32,
}

impl Default for FinraConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.finra.org".to_string(),
            months_back: 6,
        }
    }
}
