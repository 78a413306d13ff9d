//! Core output destination trait and data structures

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::{DeliveryError, ValidationError};

/// Trait for destinations that can receive a finished export file
#[async_trait]
pub trait OutputDestination: Send + Sync {
    /// Deliver the file to this destination
    async fn deliver(&self, file: &ExportFile) -> Result<DeliveryResult, DeliveryError>;

    /// Validate destination configuration
    fn validate_config(&self) -> Result<(), ValidationError>;

    /// Get destination type for logging
    fn destination_type(&self) -> &'static str;
}

/// A named, finished export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
    pub mime_type: &'static str,
}

impl ExportFile {
    pub fn csv(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
            mime_type: "text/csv",
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Result of a delivery
#[derive(Debug, Clone)]
pub struct DeliveryResult {
    pub destination_type: &'static str,
    pub delivery_time: Duration,
    pub size_bytes: u64,
    /// Where the file ended up, e.g. a filesystem path
    pub location: Option<String>,
}

impl DeliveryResult {
    pub fn success(
        destination_type: &'static str,
        delivery_time: Duration,
        size_bytes: u64,
        location: Option<String>,
    ) -> Self {
        Self {
            destination_type,
            delivery_time,
            size_bytes,
            location,
        }
    }
}
