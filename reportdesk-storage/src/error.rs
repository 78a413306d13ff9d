//! Storage error types

use reportdesk_interfaces::DatabaseError;
use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Bad query parameters such as a zero page size or malformed date bound
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Entity not found
    #[error("Report not found: {0}")]
    NotFound(i64),

    /// Validation errors on create/update payloads
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Simulated or real backend unavailability
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Generic storage errors
    #[error("Storage error: {0}")]
    Other(String),
}

impl StorageError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorageError::ConnectionFailed(_))
    }

    /// Get a user-friendly error message that doesn't expose internal details
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::InvalidArgument(_) => "Invalid query parameters",
            StorageError::NotFound(_) => "Report not found",
            StorageError::ValidationFailed(_) => "Invalid data provided",
            StorageError::ConnectionFailed(_) => "Failed to fetch reports",
            StorageError::Other(_) => "An error occurred",
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::InvalidArgument(_) => "INVALID_ARGUMENT",
            StorageError::NotFound(_) => "NOT_FOUND",
            StorageError::ValidationFailed(_) => "VALIDATION_ERROR",
            StorageError::ConnectionFailed(_) => "CONNECTION_ERROR",
            StorageError::Other(_) => "STORAGE_ERROR",
        }
    }
}

impl From<StorageError> for DatabaseError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidArgument(message) => DatabaseError::InvalidArgument { message },
            StorageError::NotFound(id) => DatabaseError::not_found("report", id),
            StorageError::ValidationFailed(message) => DatabaseError::Validation { message },
            StorageError::ConnectionFailed(message) => DatabaseError::Connection { message },
            StorageError::Other(message) => DatabaseError::Internal { message },
        }
    }
}
