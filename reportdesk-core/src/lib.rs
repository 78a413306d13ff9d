//! # ReportDesk Core
//!
//! Caller-side state for a paginated report listing. [`ReportService`] keeps
//! the current page, sorting, filters and search text, re-queries the
//! repository when they change and discards responses that were overtaken by
//! a newer request.

pub mod debounce;
pub mod error;
pub mod service;

pub use debounce::Debouncer;
pub use error::{ServiceError, ServiceResult};
pub use service::{QueryState, ReportService, Sorting, DEFAULT_PAGE_SIZE};
