//! Domain-driven configuration for ReportDesk
//!
//! Configuration is split by functional domain. Every domain has defaults, so
//! an empty YAML file (or none at all) yields a working setup; environment
//! variables prefixed with `REPORTDESK_` override individual values.

pub mod error;
pub mod loader;
pub mod validation;

pub mod domains;

pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;

pub use domains::{
    export::ExportConfig,
    logging::{LogFormat, LogLevel, LoggingConfig},
    mock_data::MockDataConfig,
    query::QueryConfig,
    search::SearchConfig,
    ReportDeskConfig,
};

pub use domains::utils::serde_duration_millis;
