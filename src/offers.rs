//! Lender offers and how they stack up against a borrower's current loan.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::amortization::RepaymentResult;
use crate::error::LoanError;
use crate::savings::{ComparisonResult, compute_savings};
use crate::scenario::LoanScenario;

const BUNDLED_OFFERS: &str = include_str!("../data/offers.json");

/// A home loan product advertised by a lender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderOffer {
    /// Lender's display name.
    pub lender: String,
    /// Product name within the lender's range.
    pub product: String,
    /// Advertised annual interest rate, in percent.
    pub annual_rate_percent: f64,
    /// Disclosed comparison rate, in percent. Display only.
    pub comparison_rate_percent: f64,
    /// One-off establishment fee.
    #[serde(default)]
    pub upfront_fee: f64,
    /// Fee charged every year of the term.
    #[serde(default)]
    pub annual_fee: f64,
}

impl LenderOffer {
    /// Upfront fee plus the annual fee for every year of the term.
    pub fn total_fees(&self, term_years: u32) -> f64 {
        self.upfront_fee + self.annual_fee * f64::from(term_years)
    }

    fn validate(&self) -> Result<(), LoanError> {
        for (field, value) in [("upfront_fee", self.upfront_fee), ("annual_fee", self.annual_fee)] {
            if !value.is_finite() || value < 0.0 {
                return Err(LoanError::scenario(
                    field,
                    format!("{} {}: fee must be zero or greater, got {value}", self.lender, self.product),
                ));
            }
        }
        Ok(())
    }
}

/// Source of lender offers.
pub trait OfferProvider {
    fn list_offers(&self) -> Result<Vec<LenderOffer>, LoanError>;
}

/// Offers held in memory, either from JSON or the bundled sample table.
#[derive(Debug, Clone, Default)]
pub struct StaticOffers {
    offers: Vec<LenderOffer>,
}

impl StaticOffers {
    pub fn new(offers: Vec<LenderOffer>) -> Self {
        StaticOffers { offers }
    }

    pub fn from_json(json: &str) -> Result<Self, LoanError> {
        let offers: Vec<LenderOffer> = serde_json::from_str(json)?;
        debug!(count = offers.len(), "loaded lender offers");
        Ok(StaticOffers { offers })
    }

    pub fn bundled() -> Result<Self, LoanError> {
        Self::from_json(BUNDLED_OFFERS)
    }
}

impl OfferProvider for StaticOffers {
    fn list_offers(&self) -> Result<Vec<LenderOffer>, LoanError> {
        Ok(self.offers.clone())
    }
}

/// One offer priced for the borrower's loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferQuote {
    pub offer: LenderOffer,
    /// Repayments at the offer's rate.
    pub repayment: RepaymentResult,
    /// Savings of this offer relative to the borrower's current rate.
    pub savings: ComparisonResult,
    /// Upfront plus annual fees over the term.
    pub total_fees: f64,
    /// Total repayment plus fees over the whole term.
    pub total_cost: f64,
}

/// Prices every offer for `baseline`'s principal, term and frequency,
/// cheapest total cost first.
///
/// # Errors
///
/// Returns [`LoanError::InvalidScenario`] if the baseline is invalid or an
/// offer carries a negative rate or fee.
pub fn quote_offers(
    baseline: &LoanScenario,
    offers: &[LenderOffer],
) -> Result<Vec<OfferQuote>, LoanError> {
    baseline.validate()?;

    let mut quotes = offers
        .iter()
        .map(|offer| {
            offer.validate()?;
            let savings = compute_savings(baseline, offer.annual_rate_percent)?;
            let total_fees = offer.total_fees(baseline.term_years);
            Ok(OfferQuote {
                offer: offer.clone(),
                repayment: savings.alternative,
                total_cost: savings.alternative.total_repayment + total_fees,
                savings,
                total_fees,
            })
        })
        .collect::<Result<Vec<_>, LoanError>>()?;

    quotes.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));

    info!(count = quotes.len(), "quoted lender offers");
    Ok(quotes)
}
