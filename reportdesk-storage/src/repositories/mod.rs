//! Repository implementations

pub mod report;

pub use report::InMemoryReportRepository;
