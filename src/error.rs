use thiserror::Error;

/// Everything that can go wrong pricing or comparing a loan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    /// A loan scenario, or a value used to build one, breaks its invariants:
    /// non-positive principal, negative rate, zero or oversized term, unknown
    /// frequency, or a negative offer fee.
    #[error("Invalid scenario: {field}: {reason}")]
    InvalidScenario { field: String, reason: String },

    /// A savings heuristic parameter is negative or not finite.
    #[error("Invalid policy: {field}: {reason}")]
    InvalidPolicy { field: String, reason: String },

    /// JSON that could not be parsed into the expected record.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A file the library was asked to read could not be read.
    #[error("I/O error reading {path}: {reason}")]
    Io { path: String, reason: String },
}

impl LoanError {
    pub(crate) fn scenario(field: &str, reason: impl Into<String>) -> Self {
        LoanError::InvalidScenario {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn policy(field: &str, reason: impl Into<String>) -> Self {
        LoanError::InvalidPolicy {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// True for [`LoanError::InvalidScenario`].
    pub fn is_invalid_scenario(&self) -> bool {
        matches!(self, LoanError::InvalidScenario { .. })
    }
}

impl From<serde_json::Error> for LoanError {
    fn from(e: serde_json::Error) -> Self {
        LoanError::Serialization(e.to_string())
    }
}
