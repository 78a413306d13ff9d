//! Shared types for ReportDesk
//!
//! This crate holds the report record model together with the query
//! parameters and pagination result used by the storage, output and service
//! crates, so that every layer speaks the same shapes.

pub mod enums;
pub mod pagination;
pub mod report;
pub mod summary;

// Re-export main types for convenience
pub use enums::{Department, ParseEnumError, ReportPriority, ReportStatus};
pub use pagination::{
    ListResponse, PaginationMeta, ReportFilters, ReportPage, ReportQuery, SortField, SortOrder,
};
pub use report::{NewReport, Report, ReportUpdate};
pub use summary::ReportSummary;
