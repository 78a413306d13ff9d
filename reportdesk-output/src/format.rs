//! Projection of reports onto display columns for export

use std::fmt::Write;

use chrono::{DateTime, Utc};
use reportdesk_api_types::Report;
use serde_json::Value;

use crate::{errors::ExportError, serializer::ExportRow};

/// Column order of a report export
pub const REPORTS_CSV_HEADERS: [&str; 8] = [
    "ID",
    "Title",
    "Status",
    "Department",
    "Priority",
    "Author",
    "Created Date",
    "Updated Date",
];

/// Month/day/year without padding, e.g. `1/15/2024`
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Map each report to a row keyed by display column. Dates are rendered in
/// UTC with `date_format`; an unusable format is a serialization error.
pub fn format_for_export(reports: &[Report], date_format: &str) -> Result<Vec<ExportRow>, ExportError> {
    reports
        .iter()
        .map(|report| {
            let mut row = ExportRow::new();
            row.insert("ID".to_string(), Value::from(report.id));
            row.insert("Title".to_string(), Value::from(report.title.as_str()));
            row.insert("Status".to_string(), Value::from(report.status.as_str()));
            row.insert("Department".to_string(), Value::from(report.department.as_str()));
            row.insert("Priority".to_string(), Value::from(report.priority.as_str()));
            row.insert("Author".to_string(), Value::from(report.author.as_str()));
            row.insert("Created Date".to_string(), Value::from(display_date(&report.created_at, date_format)?));
            row.insert("Updated Date".to_string(), Value::from(display_date(&report.updated_at, date_format)?));
            Ok(row)
        })
        .collect()
}

fn display_date(instant: &DateTime<Utc>, date_format: &str) -> Result<String, ExportError> {
    let mut rendered = String::new();
    write!(rendered, "{}", instant.format(date_format))
        .map_err(|_| ExportError::Serialization(format!("Invalid date format: {}", date_format)))?;
    Ok(rendered)
}
