use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::report::Report;

/// Aggregate counts over a report set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: u64,
    pub by_status: BTreeMap<String, u64>,
    pub by_department: BTreeMap<String, u64>,
}

impl ReportSummary {
    pub fn from_reports<'a>(reports: impl IntoIterator<Item = &'a Report>) -> Self {
        reports.into_iter().fold(Self::default(), |mut acc, report| {
            acc.total += 1;
            *acc.by_status.entry(report.status.as_str().to_string()).or_insert(0) += 1;
            *acc
                .by_department
                .entry(report.department.as_str().to_string())
                .or_insert(0) += 1;
            acc
        })
    }
}
