//! Termination date evaluation

mod calculator;
mod outcome;
mod request;

pub use calculator::{earliest_termination_date, TerminationCalculator};
pub use outcome::TerminationOutcome;
pub use request::TerminationRequest;
