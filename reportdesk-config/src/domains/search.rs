//! Search input configuration

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Search input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a typed search is applied
    #[serde(rename = "debounce_ms", with = "crate::domains::utils::serde_duration_millis")]
    pub debounce: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
        }
    }
}

impl Validatable for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        // Zero disables debouncing
        if self.debounce > Duration::from_secs(10) {
            return Err(self.validation_error("debounce_ms must not exceed 10000"));
        }
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "search"
    }
}
