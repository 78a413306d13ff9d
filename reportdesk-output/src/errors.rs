//! Export and delivery error types

use thiserror::Error;

/// Errors raised while delivering an export file
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Filesystem operation failed at {path} ({operation}): {error}")]
    Filesystem {
        path: String,
        operation: String,
        error: String,
    },

    #[error("File already exists: {path}")]
    FileExists { path: String },

    #[error("Invalid filename: {filename}")]
    InvalidFilename { filename: String },
}

/// Destination configuration validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Output directory cannot be empty")]
    EmptyPath,

    #[error("Output path is not a directory: {0}")]
    NotADirectory(String),
}

/// Errors raised by the export orchestration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("No data to export")]
    NoData,

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("Invalid destination: {0}")]
    InvalidDestination(#[from] ValidationError),
}
