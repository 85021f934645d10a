//! `loan_compare` is a Rust library for pricing and comparing fixed-rate home loans.
//!
//! It provides the calculations shared by every loan comparison and calculator
//! view of a mortgage brokerage:
//! - **Repayments**: the level weekly, fortnightly or monthly payment that
//!   amortizes a loan, along with total repayment and total interest.
//! - **Savings**: the per-period, annual and lifetime difference between a
//!   borrower's current rate and an alternative rate.
//! - **Offers**: lender products priced for the borrower's loan, including fees.
//!
//! All arithmetic is done in `f64`; use [`money::to_currency`] or the
//! `summary()` methods to get values rounded to cents for display.
//!
//! ## Usage
//!
//! ```rust
//! use loan_compare::{LoanScenario, RepaymentFrequency, compute_repayment, compute_savings};
//!
//! fn main() -> Result<(), loan_compare::LoanError> {
//!     let loan = LoanScenario::new(500_000.0, 6.5, 30, RepaymentFrequency::Monthly)?;
//!
//!     let repayment = compute_repayment(&loan)?;
//!     println!("Monthly repayment: {:.2}", repayment.periodic_repayment);
//!     println!("Total interest:    {:.2}", repayment.total_interest);
//!
//!     let savings = compute_savings(&loan, 5.75)?;
//!     println!("Lifetime savings:  {:.2}", savings.lifetime_savings);
//!     Ok(())
//! }
//! ```

pub mod amortization;
pub mod config;
pub mod error;
pub mod frequency;
pub mod money;
pub mod offers;
pub mod policy;
pub mod savings;
pub mod scenario;
pub mod store;

pub use amortization::{
    PeriodPayment, RepaymentResult, RepaymentSummary, amortization_schedule, compute_repayment,
};
pub use config::EngineConfig;
pub use error::LoanError;
pub use frequency::RepaymentFrequency;
pub use offers::{LenderOffer, OfferProvider, OfferQuote, StaticOffers, quote_offers};
pub use policy::{RateImprovementPolicy, best_available_rate, flat_savings_estimate};
pub use savings::{ComparisonResult, SavingsSummary, compute_savings};
pub use scenario::{LoanScenario, ScenarioInput};
pub use store::{KeyValueStore, MemoryStore, load_scenario, save_scenario};
