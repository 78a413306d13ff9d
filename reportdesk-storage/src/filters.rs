//! Normalization of report field filters
//!
//! [`ReportFilters`] arrives as loosely typed strings straight from the
//! caller's form state. [`ResolvedFilters`] drops empty values and parses the
//! date bounds once, so that matching a record is a handful of comparisons.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reportdesk_api_types::{Report, ReportFilters};

use crate::{StorageError, StorageResult};

/// Filter set with empty values removed and date bounds parsed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFilters<'a> {
    pub status: Option<&'a str>,
    pub department: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

impl<'a> ResolvedFilters<'a> {
    /// Resolve a raw filter set. Fails with `InvalidArgument` if a date bound
    /// cannot be parsed.
    pub fn resolve(filters: &'a ReportFilters) -> StorageResult<Self> {
        Ok(Self {
            status: non_empty(&filters.status),
            department: non_empty(&filters.department),
            priority: non_empty(&filters.priority),
            date_from: parse_optional_bound("dateFrom", &filters.date_from)?,
            date_to: parse_optional_bound("dateTo", &filters.date_to)?,
        })
    }

    pub fn matches(&self, report: &Report) -> bool {
        if let Some(status) = self.status {
            if report.status.as_str() != status {
                return false;
            }
        }
        if let Some(department) = self.department {
            if report.department.as_str() != department {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if report.priority.as_str() != priority {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if report.created_at < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if report.created_at > to {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_optional_bound(name: &str, value: &Option<String>) -> StorageResult<Option<DateTime<Utc>>> {
    match non_empty(value) {
        Some(raw) => parse_date_bound(raw)
            .map(Some)
            .map_err(|_| StorageError::InvalidArgument(format!("Invalid {} bound: {}", name, raw))),
        None => Ok(None),
    }
}

/// Parse a date bound into an instant.
///
/// Accepts RFC 3339 instants, `YYYY-MM-DDTHH:MM:SS` (read as UTC) and bare
/// `YYYY-MM-DD` dates, which mean midnight UTC of that day.
pub fn parse_date_bound(raw: &str) -> StorageResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    Err(StorageError::InvalidArgument(format!("Invalid date: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_bound_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(parse_date_bound("2024-01-15").unwrap(), midnight);
        assert_eq!(parse_date_bound("2024-01-15T00:00:00Z").unwrap(), midnight);
        assert_eq!(parse_date_bound("2024-01-15T02:00:00+02:00").unwrap(), midnight);
        assert_eq!(parse_date_bound("2024-01-15T00:00:00").unwrap(), midnight);
        assert!(parse_date_bound("15/01/2024").is_err());
        assert!(parse_date_bound("yesterday").is_err());
    }

    #[test]
    fn test_empty_values_are_no_constraint() {
        let filters = ReportFilters {
            status: Some(String::new()),
            department: None,
            priority: Some(String::new()),
            date_from: Some(String::new()),
            date_to: None,
        };
        let resolved = ResolvedFilters::resolve(&filters).unwrap();
        assert_eq!(resolved, ResolvedFilters::default());
    }

    #[test]
    fn test_malformed_bound_is_invalid_argument() {
        let filters = ReportFilters::default().date_to("not-a-date");
        let err = ResolvedFilters::resolve(&filters).unwrap_err();
        assert_eq!(
            err,
            StorageError::InvalidArgument("Invalid dateTo bound: not-a-date".to_string())
        );
    }
}
