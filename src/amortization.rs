use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::LoanError;
use crate::money::to_currency;
use crate::scenario::LoanScenario;
use rust_decimal::Decimal;

/// Rows reserved up front for a schedule; forty years of weekly payments.
const SCHEDULE_RESERVE_PERIODS: u32 = 40 * 52;

/// Level repayment and lifetime totals for a [`LoanScenario`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentResult {
    /// The fixed amount due every period.
    pub periodic_repayment: f64,
    /// `periodic_repayment * total_periods`.
    pub total_repayment: f64,
    /// `total_repayment - principal`.
    pub total_interest: f64,
    /// Number of repayments over the whole term.
    pub total_periods: u32,
    /// Number of repayments in one year.
    pub periods_per_year: u32,
}

/// Repayment figures rounded to cents for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSummary {
    /// Amount due every period.
    pub periodic_repayment: Decimal,
    /// Everything paid over the term.
    pub total_repayment: Decimal,
    /// Interest paid over the term.
    pub total_interest: Decimal,
}

impl RepaymentResult {
    /// Rounds every figure to cents.
    pub fn summary(&self) -> RepaymentSummary {
        RepaymentSummary {
            periodic_repayment: to_currency(self.periodic_repayment),
            total_repayment: to_currency(self.total_repayment),
            total_interest: to_currency(self.total_interest),
        }
    }
}

/// One row of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodPayment {
    /// 1-based period number.
    pub period: u32,
    /// Interest charged on the opening balance of the period.
    pub interest: f64,
    /// Portion of the payment that reduces the balance.
    pub principal: f64,
    /// Outstanding balance after this payment.
    pub balance: f64,
}

/// Computes the level payment that fully amortizes the scenario.
///
/// The fixed payment formula is: PMT = P * r / [1 – (1 + r)^-n], with `r` the
/// periodic rate and `n` the number of periods. The denominator is evaluated
/// through `ln_1p`/`exp_m1` so tiny rates keep their precision and very long
/// terms converge on the interest-only payment `P * r`. A zero rate falls
/// back to straight division of the principal, which is also the floor for
/// any positive rate.
///
/// # Errors
///
/// Returns [`LoanError::InvalidScenario`] when the principal is not positive,
/// the rate is negative, or the term is zero.
pub fn compute_repayment(scenario: &LoanScenario) -> Result<RepaymentResult, LoanError> {
    if let Err(e) = scenario.validate() {
        warn!(error = %e, "rejected loan scenario");
        return Err(e);
    }

    let total_periods = scenario.total_periods()?;
    let n = f64::from(total_periods);
    let r = scenario.periodic_rate();

    let straight_line = scenario.principal / n;
    let periodic_repayment = if r == 0.0 {
        straight_line
    } else {
        let discount = -(-n * r.ln_1p()).exp_m1();
        // Rates too small to register in f64 must not dip under the zero-rate payment.
        (scenario.principal * r / discount).max(straight_line)
    };

    let total_repayment = periodic_repayment * n;
    let total_interest = total_repayment - scenario.principal;

    debug!(
        principal = scenario.principal,
        rate = scenario.annual_rate_percent,
        periods = total_periods,
        frequency = %scenario.frequency,
        periodic_repayment,
        "computed repayment"
    );

    Ok(RepaymentResult {
        periodic_repayment,
        total_repayment,
        total_interest,
        total_periods,
        periods_per_year: scenario.periods_per_year(),
    })
}

/// Breaks the level repayment down into interest and principal per period.
///
/// # Errors
///
/// Same conditions as [`compute_repayment`].
pub fn amortization_schedule(scenario: &LoanScenario) -> Result<Vec<PeriodPayment>, LoanError> {
    let repayment = compute_repayment(scenario)?;
    let rate = scenario.periodic_rate();

    let mut balance = scenario.principal;
    let mut schedule =
        Vec::with_capacity(repayment.total_periods.min(SCHEDULE_RESERVE_PERIODS) as usize);

    for period in 1..=repayment.total_periods {
        let interest = balance * rate;
        // Last payment clears whatever float drift is left.
        let principal = if period == repayment.total_periods {
            balance
        } else {
            repayment.periodic_repayment - interest
        };
        balance = (balance - principal).max(0.0);
        schedule.push(PeriodPayment {
            period,
            interest,
            principal,
            balance,
        });
    }

    Ok(schedule)
}
