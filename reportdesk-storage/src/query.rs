//! Report query engine
//!
//! A query runs four passes over an in-memory report set, each on the output
//! of the previous one:
//!
//! 1. search: case-insensitive substring match on title, department, author
//! 2. field filters: exact status/department/priority, inclusive date bounds
//! 3. sort: stable, descending order reverses the comparator
//! 4. paginate: 1-based page slice plus pagination metadata
//!
//! The engine is a pure function of its inputs and never mutates the caller's
//! records.

use std::cmp::Ordering;

use reportdesk_api_types::{
    ListResponse, PaginationMeta, Report, ReportFilters, ReportPage, ReportQuery, SortField, SortOrder,
};

use crate::{filters::ResolvedFilters, StorageError, StorageResult};

/// Run a full query and return the requested page
pub fn query_reports(records: &[Report], query: &ReportQuery) -> StorageResult<ReportPage> {
    if query.page_size == 0 {
        return Err(StorageError::InvalidArgument(
            "page size must be greater than 0".to_string(),
        ));
    }
    if query.page == 0 {
        return Err(StorageError::InvalidArgument(
            "page must be greater than 0".to_string(),
        ));
    }

    let mut matched = filter_reports(records, &query.search, &query.filters)?;

    // Unknown column names resolve to createdAt
    let field = query.sort_field();
    sort_reports(&mut matched, field, query.sort_order);

    let page = paginate(matched, query.page, query.page_size);
    tracing::debug!(
        search = %query.search,
        requested_sort = %query.sort_by,
        sort_by = %field,
        page = query.page,
        page_size = query.page_size,
        total_count = page.pagination.total_count,
        returned = page.items.len(),
        "Report query completed"
    );

    Ok(page)
}

/// Apply the search and field filter passes, keeping the input order
pub fn filter_reports(records: &[Report], search: &str, filters: &ReportFilters) -> StorageResult<Vec<Report>> {
    let filters = ResolvedFilters::resolve(filters)?;
    let needle = search_needle(search);

    Ok(records
        .iter()
        .filter(|report| needle.as_deref().is_none_or(|needle| matches_search(report, needle)))
        .filter(|report| filters.matches(report))
        .cloned()
        .collect())
}

/// Stable sort by `field`. Ties keep their relative order in both directions.
pub fn sort_reports(reports: &mut [Report], field: SortField, order: SortOrder) {
    reports.sort_by(|a, b| {
        let ordering = compare_by(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

// Whitespace-only search is no search
fn search_needle(search: &str) -> Option<String> {
    if search.trim().is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    }
}

fn matches_search(report: &Report, needle: &str) -> bool {
    report.title.to_lowercase().contains(needle)
        || report.department.as_str().to_lowercase().contains(needle)
        || report.author.to_lowercase().contains(needle)
}

fn compare_by(a: &Report, b: &Report, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Title => a.title.cmp(&b.title),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::Department => a.department.cmp(&b.department),
        SortField::Priority => a.priority.as_str().cmp(b.priority.as_str()),
        SortField::Author => a.author.cmp(&b.author),
        SortField::ReportType => a.report_type.cmp(&b.report_type),
        SortField::RecordCount => a.record_count.cmp(&b.record_count),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

fn paginate(reports: Vec<Report>, page: u32, page_size: u32) -> ReportPage {
    let total_count = reports.len() as u64;
    let start = (page as usize - 1).saturating_mul(page_size as usize);

    let items = reports
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    ListResponse {
        items,
        pagination: PaginationMeta::new(page, page_size, total_count),
    }
}
