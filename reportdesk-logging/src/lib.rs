//! Logging setup for ReportDesk
//!
//! All crates emit events through `tracing`; this crate installs the global
//! subscriber from a [`LoggingConfig`](reportdesk_config::LoggingConfig).
//!
//! The library crates never install a subscriber themselves; the embedding
//! application calls [`init_logging_from_config`] once at startup.

pub mod init;

pub use init::{build_env_filter, init_logging_from_config, init_simple_tracing};
