//! Builder pattern utilities for creating test reports

use chrono::{DateTime, TimeZone, Utc};
use reportdesk_api_types::{Department, Report, ReportPriority, ReportStatus};

/// Builder pattern for creating test reports
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            report: Report {
                id: 1,
                title: "Monthly Summary 1".to_string(),
                status: ReportStatus::Draft,
                department: Department::new("Sales"),
                priority: ReportPriority::Medium,
                author: "John Smith".to_string(),
                report_type: "Monthly Summary".to_string(),
                record_count: 1000,
                created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
                updated_at: Utc.with_ymd_and_hms(2024, 1, 16, 14, 20, 0).unwrap(),
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.report.id = id;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.report.title = title.into();
        self
    }

    pub fn with_status(mut self, status: ReportStatus) -> Self {
        self.report.status = status;
        self
    }

    pub fn with_department(mut self, department: impl Into<Department>) -> Self {
        self.report.department = department.into();
        self
    }

    pub fn with_priority(mut self, priority: ReportPriority) -> Self {
        self.report.priority = priority;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.report.author = author.into();
        self
    }

    pub fn with_record_count(mut self, count: u64) -> Self {
        self.report.record_count = count;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.report.created_at = created_at;
        if self.report.updated_at < created_at {
            self.report.updated_at = created_at;
        }
        self
    }

    /// Set `created_at` from an RFC 3339 string
    pub fn created(self, rfc3339: &str) -> Self {
        let created_at = DateTime::parse_from_rfc3339(rfc3339)
            .expect("test timestamp must be RFC 3339")
            .with_timezone(&Utc);
        self.with_created_at(created_at)
    }

    /// Set `updated_at` from an RFC 3339 string
    pub fn updated(mut self, rfc3339: &str) -> Self {
        self.report.updated_at = DateTime::parse_from_rfc3339(rfc3339)
            .expect("test timestamp must be RFC 3339")
            .with_timezone(&Utc);
        self
    }

    pub fn build(self) -> Report {
        self.report
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
