//! # ReportDesk Interfaces
//!
//! Repository contracts shared between the storage implementation and the
//! service layer. Callers depend on these traits so that the in-memory store
//! can be swapped for a real backend without touching query or export code.

pub mod database;

// Re-export commonly used types
pub use database::{CrudRepository, DatabaseError, FilteredRepository, ReportRepository, Repository};
