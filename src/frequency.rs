use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoanError;

/// How often a repayment falls due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentFrequency {
    Weekly,
    Fortnightly,
    Monthly,
}

impl RepaymentFrequency {
    pub const ALL: [RepaymentFrequency; 3] = [
        RepaymentFrequency::Weekly,
        RepaymentFrequency::Fortnightly,
        RepaymentFrequency::Monthly,
    ];

    /// Number of repayments in one year.
    pub fn periods_per_year(self) -> u32 {
        match self {
            RepaymentFrequency::Weekly => 52,
            RepaymentFrequency::Fortnightly => 26,
            RepaymentFrequency::Monthly => 12,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RepaymentFrequency::Weekly => "weekly",
            RepaymentFrequency::Fortnightly => "fortnightly",
            RepaymentFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for RepaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepaymentFrequency {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(RepaymentFrequency::Weekly),
            "fortnightly" => Ok(RepaymentFrequency::Fortnightly),
            "monthly" => Ok(RepaymentFrequency::Monthly),
            other => Err(LoanError::scenario(
                "frequency",
                format!("unsupported repayment frequency '{other}'"),
            )),
        }
    }
}
