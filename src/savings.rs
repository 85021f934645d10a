use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::amortization::{RepaymentResult, compute_repayment};
use crate::error::LoanError;
use crate::money::to_currency;
use crate::scenario::LoanScenario;

/// Payment difference between a baseline loan and the same loan at another rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub baseline: RepaymentResult,
    pub alternative: RepaymentResult,
    /// Negative when the alternative rate is worse than the baseline.
    pub periodic_savings: f64,
    pub annual_savings: f64,
    pub lifetime_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSummary {
    pub periodic_savings: Decimal,
    pub annual_savings: Decimal,
    pub lifetime_savings: Decimal,
}

impl ComparisonResult {
    pub fn summary(&self) -> SavingsSummary {
        SavingsSummary {
            periodic_savings: to_currency(self.periodic_savings),
            annual_savings: to_currency(self.annual_savings),
            lifetime_savings: to_currency(self.lifetime_savings),
        }
    }
}

/// Compares `baseline` against the same principal, term and frequency at
/// `alternative_rate` percent.
///
/// The alternative rate may be higher than the baseline; savings are then
/// negative.
///
/// # Errors
///
/// Propagates [`LoanError::InvalidScenario`] from either repayment calculation.
pub fn compute_savings(
    baseline: &LoanScenario,
    alternative_rate: f64,
) -> Result<ComparisonResult, LoanError> {
    let alternative = baseline.with_rate(alternative_rate);

    let base = compute_repayment(baseline)?;
    let alt = compute_repayment(&alternative)?;

    let periodic_savings = base.periodic_repayment - alt.periodic_repayment;
    let annual_savings = periodic_savings * f64::from(base.periods_per_year);
    let lifetime_savings = periodic_savings * f64::from(base.total_periods);

    debug!(
        baseline_rate = baseline.annual_rate_percent,
        alternative_rate,
        periodic_savings,
        lifetime_savings,
        "computed savings"
    );

    Ok(ComparisonResult {
        baseline: base,
        alternative: alt,
        periodic_savings,
        annual_savings,
        lifetime_savings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::RepaymentFrequency;

    fn baseline() -> LoanScenario {
        LoanScenario {
            principal: 500_000.0,
            annual_rate_percent: 6.5,
            term_years: 30,
            frequency: RepaymentFrequency::Monthly,
        }
    }

    #[test]
    fn test_lower_rate_saves_money() {
        let result = compute_savings(&baseline(), 5.75).unwrap();
        assert!(result.periodic_savings > 0.0);
        assert_eq!(result.annual_savings, result.periodic_savings * 12.0);
        assert_eq!(result.lifetime_savings, result.periodic_savings * 360.0);
        assert_eq!(
            result.periodic_savings,
            result.baseline.periodic_repayment - result.alternative.periodic_repayment
        );
    }

    #[test]
    fn test_higher_rate_gives_negative_savings() {
        let result = compute_savings(&baseline(), 7.5).unwrap();
        assert!(result.periodic_savings < 0.0);
        assert!(result.lifetime_savings < 0.0);
    }

    #[test]
    fn test_self_comparison_is_zero() {
        let result = compute_savings(&baseline(), 6.5).unwrap();
        assert_eq!(result.periodic_savings, 0.0);
        assert_eq!(result.annual_savings, 0.0);
        assert_eq!(result.lifetime_savings, 0.0);
    }

    #[test]
    fn test_negative_alternative_rate_is_rejected() {
        let err = compute_savings(&baseline(), -0.5).unwrap_err();
        assert!(err.is_invalid_scenario());
    }

    #[test]
    fn test_invalid_baseline_is_rejected() {
        let mut bad = baseline();
        bad.term_years = 0;
        assert!(compute_savings(&bad, 5.0).unwrap_err().is_invalid_scenario());
    }
}
