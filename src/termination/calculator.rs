//! Termination date calculator
//!
//! Evaluation runs in three steps:
//! 1. find the last renewal (latest anniversary not after the reference date)
//! 2. pick the regime from that renewal, then the scenario from the decision table
//! 3. compute the earliest legal date and reconcile it with the holder's request

use chrono::NaiveDate;

use super::{TerminationOutcome, TerminationRequest};
use crate::calendar::{add_months, anniversary, last_anniversary_on_or_before};
use crate::error::{InputViolation, TerminationError};
use crate::rules::{FirstYearRule, MissedNoticeRule, Regime, RuleSet, Scenario};

/// Pure termination date calculator over an immutable rule set
#[derive(Debug, Clone, Default)]
pub struct TerminationCalculator {
    rules: RuleSet,
}

impl TerminationCalculator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate a request. `today` stands in for a missing reference date.
    pub fn evaluate(
        &self,
        request: &TerminationRequest,
        today: NaiveDate,
    ) -> Result<TerminationOutcome, TerminationError> {
        let contract_start = request.contract_start;
        let reference_date = request.reference_or(today);
        let requested = request.earliest_expected_termination;

        self.validate(contract_start, reference_date, requested)?;

        // Step 1
        let (years, last_renewal_date) = last_anniversary_on_or_before(contract_start, reference_date)?;
        let next_renewal_date = anniversary(contract_start, years + 1)?;

        // Step 2
        let regime = Regime::for_renewal(last_renewal_date, &self.rules);
        let notice_end = add_months(reference_date, regime.notice_months(&self.rules))?;

        let first_year = match regime {
            Regime::PostOct2024 => self.in_first_year(contract_start, years)?,
            Regime::PreOct2024 => false,
        };
        let renews_into_reform = self.rules.missed_notice == MissedNoticeRule::RenewIntoNewRegime
            && notice_end > next_renewal_date
            && next_renewal_date >= self.rules.cutover;

        let scenario = Scenario::select(regime, first_year, renews_into_reform);
        log::debug!(
            "contract {contract_start}: last renewal {last_renewal_date}, regime {regime}, scenario {scenario}"
        );

        let earliest_legal_date = match scenario {
            Scenario::EndOfTerm | Scenario::EndOfFirstYear => {
                if notice_end <= next_renewal_date {
                    next_renewal_date
                } else {
                    log::debug!("notice ending {notice_end} misses {next_renewal_date}, rolling one year");
                    anniversary(contract_start, years + 2)?
                }
            }
            Scenario::AnyTime => notice_end,
            Scenario::AnyTimeAfterRenewal => add_months(
                reference_date.max(next_renewal_date),
                Regime::PostOct2024.notice_months(&self.rules),
            )?,
        };

        // Step 3
        let termination_date = match requested {
            Some(date) => earliest_legal_date.max(date),
            None => earliest_legal_date,
        };

        Ok(TerminationOutcome {
            contract_start,
            reference_date,
            last_renewal_date,
            next_renewal_date,
            regime,
            scenario,
            notice_end,
            earliest_legal_date,
            earliest_expected_termination: requested,
            termination_date,
        })
    }

    /// Shorthand returning only the termination date
    pub fn termination_date(
        &self,
        request: &TerminationRequest,
        today: NaiveDate,
    ) -> Result<NaiveDate, TerminationError> {
        self.evaluate(request, today).map(|outcome| outcome.termination_date)
    }

    fn validate(
        &self,
        contract_start: NaiveDate,
        reference_date: NaiveDate,
        requested: Option<NaiveDate>,
    ) -> Result<(), TerminationError> {
        if contract_start > reference_date {
            return Err(InputViolation::ContractStartAfterReference {
                contract_start,
                reference_date,
            }
            .into());
        }

        if let Some(requested) = requested {
            if requested < reference_date {
                return Err(InputViolation::RequestBeforeReference {
                    requested,
                    reference_date,
                }
                .into());
            }
        }

        let effective = requested.unwrap_or(reference_date);
        if let Some(supported_from) = self.rules.supported_from {
            if effective < supported_from {
                return Err(TerminationError::UnsupportedDate {
                    date: effective,
                    supported_from,
                });
            }
        }

        Ok(())
    }

    /// Whether a reformed-regime contract at anniversary index `years` is
    /// still in the first-year sub-case
    fn in_first_year(&self, contract_start: NaiveDate, years: u32) -> Result<bool, TerminationError> {
        if years == 0 {
            return Ok(true);
        }
        match self.rules.first_year {
            FirstYearRule::ContractStart => Ok(false),
            FirstYearRule::FirstPeriodUnderNewRegime => {
                Ok(anniversary(contract_start, years - 1)? < self.rules.cutover)
            }
        }
    }
}

/// Evaluate with the default Belgian rules
pub fn earliest_termination_date(
    contract_start: NaiveDate,
    earliest_expected_termination: Option<NaiveDate>,
    reference_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<NaiveDate, TerminationError> {
    let request = TerminationRequest {
        contract_start,
        reference_date,
        earliest_expected_termination,
    };
    TerminationCalculator::default().termination_date(&request, today)
}
