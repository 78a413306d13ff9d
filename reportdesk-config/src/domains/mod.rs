//! Domain-specific configuration modules

pub mod export;
pub mod logging;
pub mod mock_data;
pub mod query;
pub mod search;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main ReportDesk configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportDeskConfig {
    /// Default listing parameters
    pub query: query::QueryConfig,

    /// Search input handling
    pub search: search::SearchConfig,

    /// CSV export settings
    pub export: export::ExportConfig,

    /// Mock dataset and simulated backend behavior
    pub mock_data: mock_data::MockDataConfig,

    /// Logging configuration
    pub logging: logging::LoggingConfig,
}

impl ReportDeskConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.query.validate()?;
        self.search.validate()?;
        self.export.validate()?;
        self.mock_data.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        let config = ReportDeskConfig::default();
        serde_yaml::to_string(&config)
            .unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ReportDeskConfig::default().validate_all().is_ok());
    }

    #[test]
    fn test_sample_round_trips() {
        let sample = ReportDeskConfig::generate_sample();
        let parsed: ReportDeskConfig = serde_yaml::from_str(&sample).unwrap();
        assert_eq!(parsed.query.default_page_size, 25);
        assert_eq!(parsed.search.debounce.as_millis(), 300);
        assert_eq!(parsed.mock_data.seed, None);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "export:\n  base_filename: weekly\n";
        let config: ReportDeskConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.export.base_filename, "weekly");
        assert_eq!(config.export.output_dir.to_str(), Some("exports"));
        assert_eq!(config.mock_data.record_count, 250);
    }
}
