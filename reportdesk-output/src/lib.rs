//! # ReportDesk Output
//!
//! Turns report records into CSV text and hands the result to a delivery
//! destination.
//!
//! - [`serializer`]: the quoting CSV serializer over ordered rows
//! - [`format`]: projection of reports onto display columns
//! - [`export`]: filename policy and the export orchestration
//! - [`destinations`]: where finished files go
//!
//! ## Example
//!
//! ```rust
//! use reportdesk_output::serializer::{to_csv, ExportRow};
//! use serde_json::json;
//!
//! let mut row = ExportRow::new();
//! row.insert("a".to_string(), json!(1));
//! row.insert("b".to_string(), json!("x"));
//!
//! assert_eq!(to_csv(&[row], None), "\"a\",\"b\"\n\"1\",\"x\"");
//! ```

pub mod destination;
pub mod destinations;
pub mod errors;
pub mod export;
pub mod format;
pub mod serializer;

pub use destination::{DeliveryResult, ExportFile, OutputDestination};
pub use destinations::{FilesystemConfig, FilesystemDestination};
pub use errors::{DeliveryError, ExportError, ValidationError};
pub use export::{export_filename, CsvExporter};
pub use format::{format_for_export, DEFAULT_DATE_FORMAT, REPORTS_CSV_HEADERS};
pub use serializer::{headers_only, to_csv, to_csv_from, ExportRow};
