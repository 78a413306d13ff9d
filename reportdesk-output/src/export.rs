//! Export orchestration: filename policy, CSV assembly and delivery

use chrono::{NaiveDate, Utc};
use reportdesk_api_types::Report;

use crate::{
    destination::{DeliveryResult, ExportFile, OutputDestination},
    errors::ExportError,
    format::{format_for_export, DEFAULT_DATE_FORMAT, REPORTS_CSV_HEADERS},
    serializer::{to_csv, ExportRow},
};

/// `<base>-<YYYY-MM-DD>.csv`
pub fn export_filename(base: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", base, date.format("%Y-%m-%d"))
}

/// Builds CSV exports and hands them to a destination
#[derive(Debug, Clone)]
pub struct CsvExporter {
    base_filename: String,
    date_format: String,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new("reports")
    }
}

impl CsvExporter {
    pub fn new(base_filename: impl Into<String>) -> Self {
        Self {
            base_filename: base_filename.into(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Date format used for the date columns of report exports
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Serialize `rows` and deliver them as `<base_filename>-<today>.csv`.
    ///
    /// Fails with [`ExportError::NoData`] when there is nothing to write.
    pub async fn export(
        &self,
        rows: &[ExportRow],
        headers: Option<&[&str]>,
        destination: &dyn OutputDestination,
    ) -> Result<DeliveryResult, ExportError> {
        destination.validate_config()?;

        let content = to_csv(rows, headers);
        if content.is_empty() {
            tracing::warn!(base = %self.base_filename, "No data to export");
            return Err(ExportError::NoData);
        }

        let file = ExportFile::csv(export_filename(&self.base_filename, Utc::now().date_naive()), content);
        tracing::debug!(
            filename = %file.filename,
            rows = rows.len(),
            destination = destination.destination_type(),
            "Delivering export"
        );

        Ok(destination.deliver(&file).await?)
    }

    /// Project reports onto the display columns and export them
    pub async fn export_reports(
        &self,
        reports: &[Report],
        destination: &dyn OutputDestination,
    ) -> Result<DeliveryResult, ExportError> {
        let rows = format_for_export(reports, &self.date_format)?;
        self.export(&rows, Some(&REPORTS_CSV_HEADERS), destination).await
    }
}
