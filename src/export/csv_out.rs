//! CSV export with a fixed column order

use crate::records::Record;
use crate::MonitorError;
use std::path::Path;

/// Column order is part of the export contract; downstream consumers index
/// by position.
const COLUMNS: &[&str] = &[
    "id",
    "source",
    "kind",
    "reference",
    "title",
    "date",
    "url",
    "summary",
    "tags",
    "penalty",
];

/// Summaries are truncated for the CSV view; the JSON export keeps them whole
const CSV_SUMMARY_CHARS: usize = 300;

/// Writes records as delimited CSV with the fixed column order
pub fn write_csv(records: &[&Record], path: &Path) -> Result<(), MonitorError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(COLUMNS)?;

    for record in records {
        writer.write_record(&[
            record.identity(),
            record.source.as_str().to_string(),
            record.kind.as_str().to_string(),
            record.reference.clone().unwrap_or_default(),
            record.title.clone(),
            record.date.clone().unwrap_or_default(),
            record.url.clone(),
            truncate_chars(record.summary.as_deref().unwrap_or(""), CSV_SUMMARY_CHARS),
            record.tags.join(", "),
            record.penalty.clone().unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
