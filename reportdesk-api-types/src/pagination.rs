//! Query parameters and pagination result for report listings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::ParseEnumError;
use crate::report::Report;

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ParseEnumError {
                kind: "sort order",
                value: s.to_string(),
            }),
        }
    }
}

/// Report fields a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Title,
    Status,
    Department,
    Priority,
    Author,
    ReportType,
    RecordCount,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Status => "status",
            SortField::Department => "department",
            SortField::Priority => "priority",
            SortField::Author => "author",
            SortField::ReportType => "reportType",
            SortField::RecordCount => "recordCount",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }

    /// Resolve a column name, falling back to `createdAt` for names that do
    /// not match any field.
    pub fn resolve(name: &str) -> SortField {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "status" => Ok(SortField::Status),
            "department" => Ok(SortField::Department),
            "priority" => Ok(SortField::Priority),
            "author" => Ok(SortField::Author),
            "reportType" | "report_type" => Ok(SortField::ReportType),
            "recordCount" | "record_count" => Ok(SortField::RecordCount),
            "createdAt" | "created_at" => Ok(SortField::CreatedAt),
            "updatedAt" | "updated_at" => Ok(SortField::UpdatedAt),
            _ => Err(ParseEnumError {
                kind: "sort field",
                value: s.to_string(),
            }),
        }
    }
}

/// Field filters for report listings.
///
/// Absent or empty values place no constraint on their field. Date bounds are
/// RFC 3339 instants or `YYYY-MM-DD` dates and apply inclusively to
/// `createdAt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    pub status: Option<String>,
    pub department: Option<String>,
    pub priority: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl ReportFilters {
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    pub fn date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }
}

/// Parameters for one report listing call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportQuery {
    /// Free text matched against title, department and author
    pub search: String,
    pub filters: ReportFilters,
    /// Column name; unknown names sort by `createdAt`
    pub sort_by: String,
    pub sort_order: SortOrder,
    /// Page number (1-based)
    pub page: u32,
    pub page_size: u32,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: ReportFilters::default(),
            sort_by: SortField::CreatedAt.as_str().to_string(),
            sort_order: SortOrder::Desc,
            page: 1,
            page_size: 25,
        }
    }
}

impl ReportQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = field.into();
        self.sort_order = order;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn filters(mut self, filters: ReportFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Sort field this query resolves to
    pub fn sort_field(&self) -> SortField {
        SortField::resolve(&self.sort_by)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u32,
    pub page_size: u32,
    /// Matching records before pagination
    pub total_count: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationMeta {
    /// Build metadata for `page` of a result with `total_count` records.
    /// `page_size` must be positive.
    pub fn new(page: u32, page_size: u32, total_count: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(u64::from(page_size))
        };

        Self {
            current_page: page,
            page_size,
            total_count,
            total_pages,
            has_next_page: u64::from(page) < total_pages,
            has_previous_page: page > 1,
        }
    }
}

/// List response with pagination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

/// One page of reports
pub type ReportPage = ListResponse<Report>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query = ReportQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(query.sort_field(), SortField::CreatedAt);
    }

    #[test]
    fn test_query_deserializes_partial_camel_case() {
        let query: ReportQuery =
            serde_json::from_str(r#"{"sortBy":"title","sortOrder":"asc","filters":{"dateFrom":"2024-01-01"}}"#)
                .unwrap();
        assert_eq!(query.sort_field(), SortField::Title);
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert_eq!(query.filters.date_from.as_deref(), Some("2024-01-01"));
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_unknown_sort_field_falls_back_to_created_at() {
        assert_eq!(SortField::resolve("fileSize"), SortField::CreatedAt);
        assert_eq!(SortField::resolve("updated_at"), SortField::UpdatedAt);
        assert_eq!(ReportQuery::new().sort("lastModified", SortOrder::Asc).sort_field(), SortField::CreatedAt);
    }

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(2, 10, 25);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(meta.has_previous_page);

        let last = PaginationMeta::new(3, 10, 25);
        assert!(!last.has_next_page);

        let empty = PaginationMeta::new(1, 10, 0);
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next_page);
        assert!(!empty.has_previous_page);
    }

    #[test]
    fn test_pagination_meta_serializes_camel_case() {
        let value = serde_json::to_value(PaginationMeta::new(1, 10, 3)).unwrap();
        assert_eq!(value["totalCount"], 3);
        assert_eq!(value["hasNextPage"], false);
    }
}
