use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LoanError;
use crate::policy::{DEFAULT_FLAT_SAVINGS_PERCENT, RateImprovementPolicy};

/// Tunable assumptions behind projected savings figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rate_policy: RateImprovementPolicy,
    pub flat_savings_percent: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rate_policy: RateImprovementPolicy::default(),
            flat_savings_percent: DEFAULT_FLAT_SAVINGS_PERCENT,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, LoanError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, LoanError> {
        let json = std::fs::read_to_string(path).map_err(|e| LoanError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), LoanError> {
        self.rate_policy.validate()?;
        if !self.flat_savings_percent.is_finite() || self.flat_savings_percent < 0.0 {
            return Err(LoanError::policy(
                "flat_savings_percent",
                format!("must be zero or greater, got {}", self.flat_savings_percent),
            ));
        }
        Ok(())
    }
}
