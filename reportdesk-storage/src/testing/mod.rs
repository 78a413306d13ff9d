//! Testing utilities for report storage
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for downstream crates' test suites.

pub mod builders;

pub use builders::ReportBuilder;
