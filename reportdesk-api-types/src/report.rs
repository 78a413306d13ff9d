use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Department, ReportPriority, ReportStatus};

/// A single report record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub status: ReportStatus,
    pub department: Department,
    pub priority: ReportPriority,
    pub author: String,
    #[serde(default)]
    pub report_type: String,
    #[serde(default)]
    pub record_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Merge an update into this report. `updated_at` is bumped to `now`,
    /// never moving before `created_at`.
    pub fn apply(&mut self, update: ReportUpdate, now: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title.trim().to_string();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        self.updated_at = now.max(self.created_at);
    }
}

/// Request payload for creating a report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub title: String,
    pub department: Option<Department>,
    pub priority: Option<ReportPriority>,
    pub report_type: Option<String>,
    pub author: Option<String>,
}

impl NewReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Validate the request, returning the reason on failure
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Report title is required".to_string());
        }
        Ok(())
    }
}

/// Partial update for an existing report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportUpdate {
    pub title: Option<String>,
    pub status: Option<ReportStatus>,
    pub department: Option<Department>,
    pub priority: Option<ReportPriority>,
    pub author: Option<String>,
}

impl ReportUpdate {
    pub fn validate(&self) -> Result<(), String> {
        match &self.title {
            Some(title) if title.trim().is_empty() => Err("Report title cannot be empty".to_string()),
            _ => Ok(()),
        }
    }
}
