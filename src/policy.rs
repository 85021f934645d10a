//! Heuristics the brokerage pages use to project "switch and save" figures.
//!
//! None of these constants are derived from lender data; they are marketing
//! assumptions, so every one of them is a parameter.

use serde::{Deserialize, Serialize};

use crate::error::LoanError;
use crate::savings::{ComparisonResult, compute_savings};
use crate::scenario::LoanScenario;

pub const DEFAULT_RATE_OFFSET_PERCENT: f64 = 0.75;
pub const DEFAULT_RATE_FLOOR_PERCENT: f64 = 3.0;
pub const DEFAULT_FLAT_SAVINGS_PERCENT: f64 = 5.0;

fn check_non_negative(field: &str, value: f64) -> Result<(), LoanError> {
    if !value.is_finite() || value < 0.0 {
        return Err(LoanError::policy(
            field,
            format!("must be zero or greater, got {value}"),
        ));
    }
    Ok(())
}

/// `max(floor, current_rate - offset)`, all in percent.
pub fn best_available_rate(current_rate: f64, offset: f64, floor: f64) -> Result<f64, LoanError> {
    check_non_negative("current_rate", current_rate)?;
    check_non_negative("offset", offset)?;
    check_non_negative("floor", floor)?;
    Ok(floor.max(current_rate - offset))
}

/// Flat percentage of `amount`, e.g. the "save 5%" banner figure.
pub fn flat_savings_estimate(amount: f64, percent: f64) -> Result<f64, LoanError> {
    check_non_negative("flat_savings_percent", percent)?;
    Ok(amount * percent / 100.0)
}

/// Rate improvement assumed when projecting savings against "the market".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateImprovementPolicy {
    pub offset_percent: f64,
    pub floor_percent: f64,
}

impl Default for RateImprovementPolicy {
    fn default() -> Self {
        RateImprovementPolicy {
            offset_percent: DEFAULT_RATE_OFFSET_PERCENT,
            floor_percent: DEFAULT_RATE_FLOOR_PERCENT,
        }
    }
}

impl RateImprovementPolicy {
    pub fn validate(&self) -> Result<(), LoanError> {
        check_non_negative("offset_percent", self.offset_percent)?;
        check_non_negative("floor_percent", self.floor_percent)
    }

    pub fn improved_rate(&self, current_rate: f64) -> Result<f64, LoanError> {
        best_available_rate(current_rate, self.offset_percent, self.floor_percent)
    }

    /// Savings from moving `baseline` to the improved rate.
    pub fn project(&self, baseline: &LoanScenario) -> Result<ComparisonResult, LoanError> {
        baseline.validate()?;
        let rate = self.improved_rate(baseline.annual_rate_percent)?;
        compute_savings(baseline, rate)
    }
}
