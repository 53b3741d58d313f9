//! Insurance Termination - earliest termination date for Belgian non-life insurance contracts
//!
//! This library provides:
//! - Regime selection (before/after the October 1, 2024 reform) from the last contract renewal
//! - Notice period and end-of-term rules for each regime
//! - Clamped anniversary and month arithmetic for leap-day contracts
//! - Configurable interpretations of the ambiguous parts of the law
//! - CSV batch evaluation of contract portfolios

pub mod calendar;
pub mod contract;
pub mod error;
pub mod rules;
pub mod termination;

// Re-export commonly used types
pub use calendar::parse_date;
pub use error::{InputViolation, RulesError, TerminationError};
pub use rules::{Regime, RuleSet, Scenario};
pub use termination::{earliest_termination_date, TerminationCalculator, TerminationOutcome, TerminationRequest};
