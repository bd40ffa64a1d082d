//! Export of deduplicated records to structured files
//!
//! One export pass writes four artifacts into the output directory: a
//! pretty-printed JSON document with a metadata envelope, a fixed-column
//! CSV, a plain-text line-per-URL listing, and a markdown summary report.
//! Records are ordered by relevance (keyword-match count, descending, stable)
//! so every "top N" view agrees across formats.

mod csv_out;
mod json;
mod report;

pub use csv_out::write_csv;
pub use json::write_json;
pub use report::{format_summary_report, write_summary_report, write_url_list};

use crate::records::{Record, RecordCategory};
use crate::MonitorError;
use std::path::{Path, PathBuf};

/// Paths of the files one export pass produced
#[derive(Debug)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub urls: PathBuf,
    pub report: PathBuf,
}

/// Writes all export artifacts for the given records
///
/// The output directory must already exist; creating it is the caller's
/// unrecoverable-setup concern.
pub fn export_records(records: &[Record], output_dir: &Path) -> Result<ExportPaths, MonitorError> {
    let ordered = sorted_by_relevance(records);

    let paths = ExportPaths {
        json: output_dir.join("compliance_records.json"),
        csv: output_dir.join("compliance_records.csv"),
        urls: output_dir.join("compliance_urls.txt"),
        report: output_dir.join("summary_report.md"),
    };

    write_json(&ordered, &paths.json)?;
    write_csv(&ordered, &paths.csv)?;
    write_url_list(&ordered, &paths.urls)?;
    write_summary_report(&ordered, &paths.report)?;

    tracing::info!("Exported {} records to {}", records.len(), output_dir.display());

    Ok(paths)
}

/// Orders records by keyword-match count, descending
///
/// The sort is stable: records with equal scores keep their discovery order.
pub fn sorted_by_relevance(records: &[Record]) -> Vec<&Record> {
    let mut ordered: Vec<&Record> = records.iter().collect();
    ordered.sort_by(|a, b| b.relevance().cmp(&a.relevance()));
    ordered
}

/// Counts records in each export partition
pub fn partition_counts(records: &[&Record]) -> (usize, usize) {
    let compliance_pages = records
        .iter()
        .filter(|r| r.kind.category() == RecordCategory::CompliancePage)
        .count();
    (compliance_pages, records.len() - compliance_pages)
}
