//! Configuration loading and validation

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{
    Config, CrawlerConfig, FinraConfig, OutputConfig, ScopeConfig, SecConfig, SiteConfig,
    UserAgentConfig,
};
pub use validation::validate;
