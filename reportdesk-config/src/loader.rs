//! Configuration loading and environment variable handling

use crate::domains::{
    export::ExportConfig, logging::LoggingConfig, mock_data::MockDataConfig, query::QueryConfig,
    search::SearchConfig, ReportDeskConfig,
};
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Configuration loader with environment variable support
pub struct ConfigLoader {
    /// Environment variable prefix
    prefix: String,
}

impl ConfigLoader {
    /// Create a new config loader with default prefix
    pub fn new() -> Self {
        Self {
            prefix: "REPORTDESK".to_string(),
        }
    }

    /// Create a new config loader with custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load configuration from a YAML file with environment overrides
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<ReportDeskConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config: ReportDeskConfig = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration file");

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env(&self) -> ConfigResult<ReportDeskConfig> {
        let mut config = ReportDeskConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration with fallback chain
    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<ReportDeskConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(&self, config: &mut ReportDeskConfig) -> ConfigResult<()> {
        self.apply_query_overrides(&mut config.query)?;
        self.apply_search_overrides(&mut config.search)?;
        self.apply_export_overrides(&mut config.export)?;
        self.apply_mock_data_overrides(&mut config.mock_data)?;
        self.apply_logging_overrides(&mut config.logging)?;
        Ok(())
    }

    fn apply_query_overrides(&self, config: &mut QueryConfig) -> ConfigResult<()> {
        if let Some(page_size) = self.parse_env_var("PAGE_SIZE")? {
            config.default_page_size = page_size;
        }
        Ok(())
    }

    fn apply_search_overrides(&self, config: &mut SearchConfig) -> ConfigResult<()> {
        if let Some(millis) = self.parse_env_var("SEARCH_DEBOUNCE_MS")? {
            config.debounce = Duration::from_millis(millis);
        }
        Ok(())
    }

    fn apply_export_overrides(&self, config: &mut ExportConfig) -> ConfigResult<()> {
        if let Ok(dir) = self.get_env_var("EXPORT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        if let Ok(base) = self.get_env_var("EXPORT_BASENAME") {
            config.base_filename = base;
        }

        Ok(())
    }

    fn apply_mock_data_overrides(&self, config: &mut MockDataConfig) -> ConfigResult<()> {
        if let Some(count) = self.parse_env_var("MOCK_RECORD_COUNT")? {
            config.record_count = count;
        }

        if let Some(millis) = self.parse_env_var("MOCK_LATENCY_MS")? {
            config.latency = Duration::from_millis(millis);
        }

        if let Some(rate) = self.parse_env_var("MOCK_FAILURE_RATE")? {
            config.failure_rate = rate;
        }

        Ok(())
    }

    fn apply_logging_overrides(&self, config: &mut LoggingConfig) -> ConfigResult<()> {
        if let Some(level) = self.parse_env_var("LOG_LEVEL")? {
            config.level = level;
        }

        if let Some(format) = self.parse_env_var("LOG_FORMAT")? {
            config.format = format;
        }

        Ok(())
    }

    /// Parse a prefixed variable when it is set
    fn parse_env_var<T>(&self, name: &str) -> ConfigResult<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get_env_var(name) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|e| ConfigError::EnvError(format!("Invalid {}_{}: {}", self.prefix, name, e))),
            Err(_) => Ok(None),
        }
    }

    /// Get environment variable with prefix
    fn get_env_var(&self, name: &str) -> Result<String, std::env::VarError> {
        std::env::var(format!("{}_{}", self.prefix, name))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
