//! Database repository interfaces
//!
//! These traits describe the record store the report service talks to. The
//! store owns the full record set; callers only see pages, summaries and
//! single records.

use async_trait::async_trait;
use reportdesk_api_types::{
    pagination::ListResponse, NewReport, Report, ReportFilters, ReportQuery, ReportSummary, ReportUpdate,
};

/// Common database error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Connection error: {message}")]
    Connection { message: String },

    #[error("Internal database error: {message}")]
    Internal { message: String },
}

impl DatabaseError {
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Whether the caller may reasonably try the same call again
    pub fn is_retryable(&self) -> bool {
        matches!(self, DatabaseError::Connection { .. })
    }
}

/// Base repository trait with health check capability
#[async_trait]
pub trait Repository: Send + Sync {
    /// Check if the repository is healthy and can serve requests
    async fn health_check(&self) -> Result<(), DatabaseError>;
}

/// Generic CRUD repository trait
#[async_trait]
pub trait CrudRepository<T, N, U>: Repository {
    /// Create a new entity, assigning its id
    async fn create(&self, new: N) -> Result<T, DatabaseError>;

    /// Find entity by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, DatabaseError>;

    /// Apply a partial update to an existing entity
    async fn update(&self, id: i64, update: U) -> Result<T, DatabaseError>;

    /// Delete entity by ID, returning the removed entity
    async fn delete(&self, id: i64) -> Result<T, DatabaseError>;

    /// Get total count of entities
    async fn count(&self) -> Result<u64, DatabaseError>;
}

/// Repository trait for entities that support filtering and pagination
#[async_trait]
pub trait FilteredRepository<T, N, U, Q, F>: CrudRepository<T, N, U> {
    /// Find one page of entities for a query
    async fn find_with_query(&self, query: Q) -> Result<ListResponse<T>, DatabaseError>;

    /// Find every entity matching a search and filter set, in store order
    async fn find_all_filtered(&self, search: &str, filters: F) -> Result<Vec<T>, DatabaseError>;

    /// Count entities matching a search and filter set
    async fn count_with_filters(&self, search: &str, filters: F) -> Result<u64, DatabaseError>;
}

/// Report repository interface
#[async_trait]
pub trait ReportRepository:
    FilteredRepository<Report, NewReport, ReportUpdate, ReportQuery, ReportFilters>
{
    /// Totals by status and department over the whole store
    async fn summary(&self) -> Result<ReportSummary, DatabaseError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DatabaseError::not_found("report", 42);
        assert_eq!(err.to_string(), "Entity not found: report with id 42");
        assert!(!err.is_retryable());

        let err = DatabaseError::Connection {
            message: "Failed to fetch reports".to_string(),
        };
        assert!(err.is_retryable());
    }
}
