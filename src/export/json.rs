//! JSON export with a metadata envelope

use crate::records::Record;
use crate::MonitorError;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Envelope<'a> {
    metadata: Metadata,
    records: Vec<ExportedRecord<'a>>,
}

#[derive(Serialize)]
struct Metadata {
    generated_at: String,
    total_records: usize,
    sources: Vec<&'static str>,
}

#[derive(Serialize)]
struct ExportedRecord<'a> {
    id: String,
    #[serde(flatten)]
    record: &'a Record,
}

/// Writes records as pretty-printed UTF-8 JSON
///
/// Non-ASCII text is preserved verbatim; serde_json does not escape it.
pub fn write_json(records: &[&Record], path: &Path) -> Result<(), MonitorError> {
    let mut sources: Vec<&'static str> = Vec::new();
    for record in records {
        let name = record.source.as_str();
        if !sources.contains(&name) {
            sources.push(name);
        }
    }

    let envelope = Envelope {
        metadata: Metadata {
            generated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            total_records: records.len(),
            sources,
        },
        records: records
            .iter()
            .map(|record| ExportedRecord {
                id: record.identity(),
                record,
            })
            .collect(),
    };

    let body = serde_json::to_string_pretty(&envelope)?;
    std::fs::write(path, body)?;

    Ok(())
}
