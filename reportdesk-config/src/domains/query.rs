//! Default listing parameters

use crate::error::ConfigResult;
use crate::validation::{validate_enum_choice, validate_positive, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Query defaults applied when a caller does not choose its own
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Page size used when none is given
    pub default_page_size: u32,

    /// Sort column used when none is given
    pub default_sort_by: String,

    /// `asc` or `desc`
    pub default_sort_order: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: 25,
            default_sort_by: "createdAt".to_string(),
            default_sort_order: "desc".to_string(),
        }
    }
}

impl Validatable for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.default_page_size, "default_page_size", self.domain_name())?;
        validate_required_string(&self.default_sort_by, "default_sort_by", self.domain_name())?;
        validate_enum_choice(
            &self.default_sort_order,
            &["asc", "desc"],
            "default_sort_order",
            self.domain_name(),
        )?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "query"
    }
}
