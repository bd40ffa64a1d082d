//! Compliance-monitor command-line interface
//!
//! One subcommand per scraper role, plus `all` to run the three roles and
//! export a single deduplicated data set.

use clap::{Parser, Subcommand};
use compliance_monitor::config::{load_config, validate};
use compliance_monitor::export::export_records;
use compliance_monitor::records::RecordSet;
use compliance_monitor::sources::{finra_seed_urls, sec_seed_urls};
use compliance_monitor::{Config, CrawlEngine, MonitorError, SourceExtractor};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Compliance-Monitor: a regulatory content crawler
///
/// Discovers compliance and enforcement related content on an investment
/// firm's site and the SEC/FINRA regulator sites, classifies it against a
/// keyword taxonomy, and exports matched records to JSON, CSV, and a
/// summary report.
#[derive(Parser, Debug)]
#[command(name = "compliance-monitor")]
#[command(version = "1.0.0")]
#[command(about = "A regulatory content crawler", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (built-in defaults target the
    /// production sites)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output directory override
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl the firm site for compliance-related pages
    Site {
        /// Seed URLs to start from (defaults come from the configuration)
        #[arg(value_name = "SEED")]
        seeds: Vec<String>,

        /// Maximum completed fetch attempts
        #[arg(long, value_name = "N")]
        max_pages: Option<u32>,
    },

    /// Scrape SEC release listings for enforcement actions
    Sec {
        /// First year of release listings to cover
        #[arg(long, value_name = "YEAR")]
        start_year: Option<i32>,

        /// Maximum completed fetch attempts
        #[arg(long, value_name = "N")]
        max_pages: Option<u32>,
    },

    /// Scrape FINRA monthly disciplinary actions and enforcement news
    Finra {
        /// Number of trailing calendar months to cover
        #[arg(long, value_name = "N")]
        months: Option<u32>,

        /// Maximum completed fetch attempts
        #[arg(long, value_name = "N")]
        max_pages: Option<u32>,
    },

    /// Run all three scraper roles and export one deduplicated data set
    All,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    if let Some(dir) = &cli.output {
        config.output.directory = dir.display().to_string();
    }

    let records = match cli.command {
        Command::Site { seeds, max_pages } => {
            if !seeds.is_empty() {
                config.site.seeds = seeds;
            }
            if let Some(n) = max_pages {
                config.crawler.max_pages = n;
            }
            validate(&config)?;
            run_role(&config, SourceExtractor::Site).await?
        }

        Command::Sec {
            start_year,
            max_pages,
        } => {
            if let Some(year) = start_year {
                config.sec.start_year = year;
            }
            if let Some(n) = max_pages {
                config.crawler.max_pages = n;
            }
            validate(&config)?;
            run_role(&config, SourceExtractor::Sec).await?
        }

        Command::Finra { months, max_pages } => {
            if let Some(n) = months {
                config.finra.months_back = n;
            }
            if let Some(n) = max_pages {
                config.crawler.max_pages = n;
            }
            validate(&config)?;
            run_role(&config, SourceExtractor::Finra).await?
        }

        Command::All => {
            validate(&config)?;
            let mut all = RecordSet::new();
            for extractor in [
                SourceExtractor::Site,
                SourceExtractor::Sec,
                SourceExtractor::Finra,
            ] {
                all.merge(run_role(&config, extractor).await?);
            }
            all
        }
    };

    let output_dir = Path::new(&config.output.directory);
    if let Err(e) = std::fs::create_dir_all(output_dir) {
        tracing::error!(
            "Cannot create output directory {}: {}",
            output_dir.display(),
            e
        );
        return Err(e.into());
    }

    let paths = export_records(records.records(), output_dir)?;

    println!("Total unique records: {}", records.len());
    println!("Output files:");
    println!("  - JSON: {}", paths.json.display());
    println!("  - CSV: {}", paths.csv.display());
    println!("  - URL list: {}", paths.urls.display());
    println!("  - Report: {}", paths.report.display());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("compliance_monitor=info,warn"),
            1 => EnvFilter::new("compliance_monitor=debug,info"),
            2 => EnvFilter::new("compliance_monitor=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Runs one scraper role to completion and returns its records
async fn run_role(
    config: &Config,
    extractor: SourceExtractor,
) -> Result<RecordSet, MonitorError> {
    let seeds = seed_urls_for(config, extractor)?;

    let mut engine = CrawlEngine::new(config, extractor)?;
    engine.seed(seeds);

    let outcome = engine.run().await;
    println!(
        "{}: {} pages fetched ({} failed), {} records",
        extractor.source(),
        outcome.pages_fetched,
        outcome.pages_failed,
        outcome.records.len()
    );

    Ok(outcome.records)
}

/// Builds the seed URL set for a scraper role
fn seed_urls_for(
    config: &Config,
    extractor: SourceExtractor,
) -> Result<Vec<Url>, MonitorError> {
    match extractor {
        SourceExtractor::Site => config
            .site
            .seeds
            .iter()
            .map(|s| Url::parse(s))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into),
        SourceExtractor::Sec => sec_seed_urls(&config.sec).map_err(Into::into),
        SourceExtractor::Finra => finra_seed_urls(&config.finra).map_err(Into::into),
    }
}
