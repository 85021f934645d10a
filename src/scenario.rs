use serde::{Deserialize, Serialize};

use crate::error::LoanError;
use crate::frequency::RepaymentFrequency;

/// A fixed-rate loan to be amortized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanScenario {
    /// Amount borrowed, in currency units.
    pub principal: f64,
    /// Nominal annual interest rate as a percentage (e.g., 6.5 for 6.5%).
    pub annual_rate_percent: f64,
    /// Loan term in whole years.
    pub term_years: u32,
    /// Repayment cadence.
    pub frequency: RepaymentFrequency,
}

impl LoanScenario {
    pub fn new(
        principal: f64,
        annual_rate_percent: f64,
        term_years: u32,
        frequency: RepaymentFrequency,
    ) -> Result<Self, LoanError> {
        let scenario = LoanScenario {
            principal,
            annual_rate_percent,
            term_years,
            frequency,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Checks the invariants every calculation relies on.
    ///
    /// Fields are public, so calculations call this again rather than trusting
    /// that the value came through [`LoanScenario::new`].
    pub fn validate(&self) -> Result<(), LoanError> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(LoanError::scenario(
                "principal",
                format!("must be a positive amount, got {}", self.principal),
            ));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0.0 {
            return Err(LoanError::scenario(
                "annual_rate_percent",
                format!("must be zero or greater, got {}", self.annual_rate_percent),
            ));
        }
        if self.term_years == 0 {
            return Err(LoanError::scenario("term_years", "must be at least one year"));
        }
        self.total_periods()?;
        Ok(())
    }

    /// Same loan at a different annual rate.
    pub fn with_rate(&self, annual_rate_percent: f64) -> Self {
        LoanScenario {
            annual_rate_percent,
            ..*self
        }
    }

    pub fn periods_per_year(&self) -> u32 {
        self.frequency.periods_per_year()
    }

    /// Number of repayments over the whole term.
    ///
    /// The longest accepted term is the one whose repayment count still fits
    /// in a `u32`: `u32::MAX / periods_per_year` years.
    pub fn total_periods(&self) -> Result<u32, LoanError> {
        self.term_years
            .checked_mul(self.periods_per_year())
            .ok_or_else(|| {
                LoanError::scenario(
                    "term_years",
                    format!(
                        "{} years of {} repayments is more periods than supported",
                        self.term_years, self.frequency
                    ),
                )
            })
    }

    /// Interest rate applied each period, as a fraction.
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / f64::from(self.periods_per_year())
    }
}

/// Loosely typed scenario as collaborators hand it over (form fields, JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: f64,
    pub frequency: String,
}

impl TryFrom<ScenarioInput> for LoanScenario {
    type Error = LoanError;

    /// Fractional terms are rejected rather than rounded.
    fn try_from(input: ScenarioInput) -> Result<Self, Self::Error> {
        let frequency: RepaymentFrequency = input.frequency.parse()?;

        let term = input.term_years;
        if !term.is_finite() || term <= 0.0 {
            return Err(LoanError::scenario(
                "term_years",
                format!("must be a positive number of years, got {term}"),
            ));
        }
        if term.fract() != 0.0 || term > f64::from(u32::MAX) {
            return Err(LoanError::scenario(
                "term_years",
                format!("must be a whole number of years, got {term}"),
            ));
        }

        LoanScenario::new(
            input.principal,
            input.annual_rate_percent,
            term as u32,
            frequency,
        )
    }
}
