//! Service error types

use reportdesk_config::ConfigError;
use reportdesk_interfaces::DatabaseError;
use reportdesk_output::{ExportError, ValidationError};
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the report service
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Invalid export destination: {0}")]
    Destination(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ServiceError {
    /// Whether repeating the call may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ServiceError::Database(e) => e.is_retryable(),
            _ => false,
        }
    }
}
