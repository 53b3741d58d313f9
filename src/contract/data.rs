//! Contract rows read from and written to batch CSV files

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{parse_date, DATE_FORMAT};
use crate::error::TerminationError;
use crate::rules::{Regime, Scenario};
use crate::termination::{TerminationCalculator, TerminationRequest};

/// A contract to evaluate, dates kept as read
///
/// Dates are only parsed at evaluation time so one bad cell fails its own
/// row instead of the whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRecord {
    pub contract_id: String,
    pub contract_start: String,

    /// Per-contract notice date; the batch default applies when absent
    pub reference_date: Option<String>,

    pub earliest_expected_termination: Option<String>,
}

impl ContractRecord {
    /// Parse the dates into a request
    pub fn to_request(&self) -> Result<TerminationRequest, TerminationError> {
        let optional = |field: &Option<String>| field.as_deref().map(parse_date).transpose();

        Ok(TerminationRequest {
            contract_start: parse_date(&self.contract_start)?,
            reference_date: optional(&self.reference_date)?,
            earliest_expected_termination: optional(&self.earliest_expected_termination)?,
        })
    }

    /// Evaluate this contract into an output row; failures land in the
    /// row's `error` column
    pub fn evaluate(&self, calculator: &TerminationCalculator, default_reference: NaiveDate) -> TerminationRow {
        let mut row = TerminationRow {
            contract_id: self.contract_id.clone(),
            contract_start: self.contract_start.clone(),
            reference_date: self
                .reference_date
                .clone()
                .unwrap_or_else(|| default_reference.format(DATE_FORMAT).to_string()),
            last_renewal_date: None,
            regime: None,
            scenario: None,
            termination_date: None,
            error: None,
        };

        match self
            .to_request()
            .and_then(|request| calculator.evaluate(&request, default_reference))
        {
            Ok(outcome) => {
                row.last_renewal_date = Some(outcome.last_renewal_date);
                row.regime = Some(outcome.regime);
                row.scenario = Some(outcome.scenario);
                row.termination_date = Some(outcome.termination_date);
            }
            Err(e) => row.error = Some(e.to_string()),
        }

        row
    }
}

/// One output row; result columns stay empty when evaluation failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminationRow {
    pub contract_id: String,
    pub contract_start: String,
    pub reference_date: String,
    pub last_renewal_date: Option<NaiveDate>,
    pub regime: Option<Regime>,
    pub scenario: Option<Scenario>,
    pub termination_date: Option<NaiveDate>,
    pub error: Option<String>,
}
