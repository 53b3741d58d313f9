//! Error types for termination date evaluation and rule set loading

use chrono::NaiveDate;

/// Ordering constraint violated by a termination request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputViolation {
    /// The contract cannot start after the date notice is given
    #[error("invalid input: the contract start ({contract_start}) should precede the reference date ({reference_date})")]
    ContractStartAfterReference {
        contract_start: NaiveDate,
        reference_date: NaiveDate,
    },

    /// The holder cannot ask for a termination before notice is given
    #[error("invalid input: the earliest expected termination ({requested}) should not precede the reference date ({reference_date})")]
    RequestBeforeReference {
        requested: NaiveDate,
        reference_date: NaiveDate,
    },
}

/// Error type for all fallible operations of the calculator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TerminationError {
    /// Input string is not a `YYYY-MM-DD` calendar date
    #[error("invalid date: {input} (expected YYYY-MM-DD)")]
    MalformedDate { input: String },

    /// Dates are individually valid but badly ordered
    #[error(transparent)]
    InvalidInput(#[from] InputViolation),

    /// Requested date falls before the range covered by the rules
    #[error("the requested termination date ({date}) falls outside of the supported range ({supported_from} onwards)")]
    UnsupportedDate {
        date: NaiveDate,
        supported_from: NaiveDate,
    },

    /// Calendar arithmetic left chrono's representable range
    #[error("date arithmetic overflow: {date} + {months} months")]
    DateOutOfRange { date: NaiveDate, months: u32 },
}

impl TerminationError {
    /// True for the ordering violations (start after reference, request before reference)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TerminationError::InvalidInput(_))
    }
}

/// Error loading or validating a rule set file
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rule set {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule set: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rule set: {0}")]
    Invalid(String),
}

/// Error loading a contract file for batch evaluation
#[derive(Debug, thiserror::Error)]
pub enum ContractLoadError {
    #[error("failed to read contracts: {0}")]
    Csv(#[from] csv::Error),
}
