//! Report storage and querying for ReportDesk
//!
//! This crate provides the query engine that turns a report set and a
//! [`ReportQuery`](reportdesk_api_types::ReportQuery) into one page of
//! results, together with an in-memory repository implementing the
//! repository interfaces on top of it.

pub mod error;
pub mod filters;
pub mod mock_data;
pub mod query;
pub mod repositories;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export core types for convenience
pub use error::{StorageError, StorageResult};
pub use filters::{parse_date_bound, ResolvedFilters};
pub use mock_data::generate_mock_reports;
pub use query::{filter_reports, query_reports, sort_reports};
pub use repositories::InMemoryReportRepository;
