//! Mock report dataset
//!
//! Produces the development dataset the in-memory repository is seeded with.
//! Categorical fields cycle with the record index so that every combination
//! shows up; timestamps and record counts are random.

use chrono::{DateTime, Duration, Utc};
use reportdesk_api_types::{Department, Report, ReportPriority, ReportStatus};

pub const DEPARTMENTS: [&str; 6] = ["Sales", "Marketing", "Finance", "HR", "Operations", "IT"];

pub const REPORT_TYPES: [&str; 5] = [
    "Monthly Summary",
    "Weekly Analytics",
    "User Activity",
    "Performance Report",
    "Budget Analysis",
];

pub const AUTHORS: [&str; 6] = [
    "John Smith",
    "Sarah Johnson",
    "Mike Davis",
    "Emily Brown",
    "Chris Wilson",
    "Lisa Anderson",
];

const CREATED_WINDOW_SECS: u64 = 90 * 24 * 60 * 60;
const UPDATED_WINDOW_SECS: u64 = 7 * 24 * 60 * 60;

/// Generate `count` reports. A seed makes the random parts reproducible.
pub fn generate_mock_reports(count: usize, seed: Option<u64>) -> Vec<Report> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    generate_mock_reports_at(count, Utc::now(), &mut rng)
}

/// Generate `count` reports relative to `now`
pub fn generate_mock_reports_at(count: usize, now: DateTime<Utc>, rng: &mut fastrand::Rng) -> Vec<Report> {
    (0..count)
        .map(|i| {
            let report_type = REPORT_TYPES[i % REPORT_TYPES.len()];
            let created_at = now - Duration::seconds(rng.u64(0..CREATED_WINDOW_SECS) as i64);
            let updated_at = (now - Duration::seconds(rng.u64(0..UPDATED_WINDOW_SECS) as i64)).max(created_at);

            Report {
                id: i as i64 + 1,
                title: format!("{} {}", report_type, i / REPORT_TYPES.len() + 1),
                status: ReportStatus::ALL[i % ReportStatus::ALL.len()],
                department: Department::new(DEPARTMENTS[i % DEPARTMENTS.len()]),
                priority: ReportPriority::ALL[i % ReportPriority::ALL.len()],
                author: AUTHORS[i % AUTHORS.len()].to_string(),
                report_type: report_type.to_string(),
                record_count: rng.u64(1000..51000),
                created_at,
                updated_at,
            }
        })
        .collect()
}
