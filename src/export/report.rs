//! Markdown summary report and URL listing

use crate::export::partition_counts;
use crate::records::Record;
use crate::MonitorError;
use std::collections::HashMap;
use std::path::Path;

/// How many keyword rows the report shows
const TOP_KEYWORDS: usize = 15;

/// How many records the report lists in full
const TOP_RECORDS: usize = 20;

/// Writes the plain-text line-per-URL listing
///
/// URLs appear in the same relevance order as every other export artifact.
pub fn write_url_list(records: &[&Record], path: &Path) -> Result<(), MonitorError> {
    let mut body = String::new();
    for record in records {
        body.push_str(&record.url);
        body.push('\n');
    }
    std::fs::write(path, body)?;
    Ok(())
}

/// Writes the human-readable markdown summary
pub fn write_summary_report(records: &[&Record], path: &Path) -> Result<(), MonitorError> {
    let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    std::fs::write(path, format_summary_report(records, &generated_at))?;
    Ok(())
}

/// Formats the markdown summary for a relevance-ordered record slice
pub fn format_summary_report(records: &[&Record], generated_at: &str) -> String {
    let mut md = String::new();

    md.push_str("# Compliance Monitoring Summary\n\n");
    md.push_str(&format!("**Generated:** {}\n", generated_at));
    md.push_str(&format!("**Total Records:** {}\n\n", records.len()));

    let (compliance_pages, enforcement_actions) = partition_counts(records);
    md.push_str(&format!("- **Compliance pages**: {}\n", compliance_pages));
    md.push_str(&format!(
        "- **Enforcement actions**: {}\n\n",
        enforcement_actions
    ));

    md.push_str("## Records by Source\n\n");
    md.push_str("| Source | Count |\n");
    md.push_str("|--------|-------|\n");
    for (source, count) in counted(records.iter().map(|r| r.source.as_str().to_string())) {
        md.push_str(&format!("| {} | {} |\n", source, count));
    }

    md.push_str("\n## Records by Type\n\n");
    md.push_str("| Type | Count |\n");
    md.push_str("|------|-------|\n");
    for (kind, count) in counted(records.iter().map(|r| r.kind.as_str().to_string())) {
        md.push_str(&format!("| {} | {} |\n", kind, count));
    }

    md.push_str("\n## Top Violation Keywords\n\n");
    md.push_str("| Keyword | Occurrences |\n");
    md.push_str("|---------|-------------|\n");
    let tag_counts = counted(records.iter().flat_map(|r| r.tags.iter().cloned()));
    for (tag, count) in tag_counts.into_iter().take(TOP_KEYWORDS) {
        md.push_str(&format!("| {} | {} |\n", tag, count));
    }

    md.push_str("\n## Top Records\n\n");
    for record in records.iter().take(TOP_RECORDS) {
        md.push_str(&format!("### {}\n\n", record.title));
        md.push_str(&format!("- **Source:** {}\n", record.source));
        md.push_str(&format!("- **Type:** {}\n", record.kind));
        if let Some(reference) = &record.reference {
            md.push_str(&format!("- **Reference:** {}\n", reference));
        }
        if let Some(date) = &record.date {
            md.push_str(&format!("- **Date:** {}\n", date));
        }
        if !record.tags.is_empty() {
            let shown: Vec<&str> = record.tags.iter().take(5).map(|s| s.as_str()).collect();
            md.push_str(&format!("- **Keywords:** {}\n", shown.join(", ")));
        }
        if let Some(penalty) = &record.penalty {
            md.push_str(&format!("- **Penalty:** {}\n", penalty));
        }
        if !record.rule_citations.is_empty() {
            md.push_str(&format!(
                "- **Rules cited:** {}\n",
                record.rule_citations.join(", ")
            ));
        }
        md.push_str(&format!("- **URL:** {}\n\n", record.url));
    }

    md
}

/// Counts occurrences, ordered by count descending then name ascending
fn counted(items: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
