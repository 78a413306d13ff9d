//! CSV export configuration

use crate::error::ConfigResult;
use crate::validation::{validate_date_format, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CSV export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Filename stem; the export date and `.csv` are appended
    pub base_filename: String,

    /// Directory export files are written into
    pub output_dir: PathBuf,

    /// chrono format string for date columns
    pub date_format: String,

    /// Whether an existing file with the same name is replaced
    #[serde(default = "crate::domains::utils::default_true")]
    pub overwrite: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_filename: "reports".to_string(),
            output_dir: PathBuf::from("exports"),
            date_format: "%-m/%-d/%Y".to_string(),
            overwrite: true,
        }
    }
}

impl Validatable for ExportConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.base_filename, "base_filename", self.domain_name())?;
        validate_date_format(&self.date_format, "date_format", self.domain_name())?;

        if self.base_filename.contains(['/', '\\', '\0']) {
            return Err(self.validation_error("base_filename must not contain path separators"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(self.validation_error("output_dir cannot be empty"));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "export"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_filename_rejects_separators() {
        let config = ExportConfig {
            base_filename: "../reports".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unusable_date_format_is_invalid() {
        let config = ExportConfig {
            date_format: "%Q".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("date_format"));
    }

    #[test]
    fn test_empty_output_dir_is_invalid() {
        let config = ExportConfig {
            output_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
