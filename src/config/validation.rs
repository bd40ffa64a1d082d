use crate::config::types::{Config, CrawlerConfig, ScopeConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_scope_config(&config.scope)?;
    validate_seeds(&config.site.seeds)?;
    validate_base_url(&config.sec.base_url)?;
    validate_base_url(&config.finra.base_url)?;

    if config.output.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output.directory cannot be empty".to_string(),
        ));
    }

    if config.sec.start_year < 1990 {
        return Err(ConfigError::Validation(format!(
            "sec.start-year must be 1990 or later, got {}",
            config.sec.start_year
        )));
    }

    if config.finra.months_back < 1 || config.finra.months_back > 120 {
        return Err(ConfigError::Validation(format!(
            "finra.months-back must be between 1 and 120, got {}",
            config.finra.months_back
        )));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if !config.rate_limit.is_finite() || config.rate_limit <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "rate-limit must be a positive number of requests per second, got {}",
            config.rate_limit
        )));
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(
            "max-pages must be >= 1".to_string(),
        ));
    }

    if config.request_timeout < 1 {
        return Err(ConfigError::Validation(
            "request-timeout must be >= 1 second".to_string(),
        ));
    }

    if config.progress_interval < 1 {
        return Err(ConfigError::Validation(
            "progress-interval must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if config.contact.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent contact cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the scope allow-list
fn validate_scope_config(config: &ScopeConfig) -> Result<(), ConfigError> {
    if config.allowed_domains.is_empty() {
        return Err(ConfigError::Validation(
            "scope.allowed-domains must list at least one domain".to_string(),
        ));
    }

    for pattern in &config.allowed_domains {
        validate_domain_pattern(pattern)?;
    }

    Ok(())
}

/// Validates a domain pattern ("example.com" or "*.example.com")
fn validate_domain_pattern(pattern: &str) -> Result<(), ConfigError> {
    let base = pattern.strip_prefix("*.").unwrap_or(pattern);

    if base.is_empty() {
        return Err(ConfigError::InvalidPattern(pattern.to_string()));
    }

    if base.contains("://") || base.contains('/') || base.contains('*') {
        return Err(ConfigError::InvalidPattern(pattern.to_string()));
    }

    if !base
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::InvalidPattern(pattern.to_string()));
    }

    Ok(())
}

/// Validates seed URLs
fn validate_seeds(seeds: &[String]) -> Result<(), ConfigError> {
    for seed in seeds {
        let url = Url::parse(seed)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::Validation(format!(
                "Seed URL '{}' must use an http(s) scheme",
                seed
            )));
        }
    }

    Ok(())
}

/// Validates a source base URL
fn validate_base_url(base: &str) -> Result<(), ConfigError> {
    Url::parse(base)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base URL '{}': {}", base, e)))?;
    Ok(())
}
