//! Mock dataset configuration

use crate::error::ConfigResult;
use crate::validation::{validate_probability, Validatable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Size of the generated dataset and simulated backend behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MockDataConfig {
    /// Number of reports generated at startup
    pub record_count: usize,

    /// Delay applied to every repository call
    #[serde(rename = "latency_ms", with = "crate::domains::utils::serde_duration_millis")]
    pub latency: Duration,

    /// Probability that a listing call fails
    pub failure_rate: f64,

    /// Fixed seed for reproducible datasets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        Self {
            record_count: 250,
            latency: Duration::from_millis(1200),
            failure_rate: 0.03,
            seed: None,
        }
    }
}

impl Validatable for MockDataConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_probability(self.failure_rate, "failure_rate", self.domain_name())?;

        if self.record_count > 1_000_000 {
            return Err(self.validation_error("record_count must not exceed 1000000"));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "mock_data"
    }
}
