//! Evaluated termination with its full breakdown

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::DATE_FORMAT;
use crate::rules::{Regime, Scenario};

/// Result of a termination evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminationOutcome {
    pub contract_start: NaiveDate,
    pub reference_date: NaiveDate,

    /// Latest anniversary not after the reference date
    pub last_renewal_date: NaiveDate,

    /// Anniversary following `last_renewal_date`
    pub next_renewal_date: NaiveDate,

    pub regime: Regime,
    pub scenario: Scenario,

    /// Reference date plus the regime's notice period
    pub notice_end: NaiveDate,

    /// Earliest date the law allows, before the holder's request is applied
    pub earliest_legal_date: NaiveDate,

    pub earliest_expected_termination: Option<NaiveDate>,

    /// Earliest permissible termination date honouring the holder's request
    pub termination_date: NaiveDate,
}

impl TerminationOutcome {
    /// The single line printed by the command line tool
    pub fn summary_line(&self) -> String {
        format!(
            "Earliest possible termination date: {}.",
            self.termination_date.format(DATE_FORMAT)
        )
    }

    /// Multi-line breakdown of how the date was reached
    pub fn explanation(&self) -> String {
        let mut lines = vec![
            format!("  Contract start:      {}", self.contract_start),
            format!("  Reference date:      {}", self.reference_date),
            format!("  Last renewal:        {}", self.last_renewal_date),
            format!("  Next renewal:        {}", self.next_renewal_date),
            format!("  Regime:              {}", self.regime),
            format!("  Scenario:            {}", self.scenario),
            format!("  Notice ends:         {}", self.notice_end),
            format!("  Earliest legal date: {}", self.earliest_legal_date),
        ];
        if let Some(requested) = self.earliest_expected_termination {
            lines.push(format!("  Requested:           {}", requested));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::{TerminationCalculator, TerminationRequest};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn evaluate(request: TerminationRequest) -> TerminationOutcome {
        TerminationCalculator::default()
            .evaluate(&request, ymd(2000, 1, 1))
            .unwrap()
    }

    fn reformed_any_time() -> TerminationOutcome {
        evaluate(
            TerminationRequest::new(ymd(2023, 9, 5))
                .with_reference_date(ymd(2025, 11, 5))
                .with_earliest_expected_termination(ymd(2025, 12, 5)),
        )
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            reformed_any_time().summary_line(),
            "Earliest possible termination date: 2026-01-05."
        );
    }

    #[test]
    fn test_explanation_with_request() {
        let expected = [
            "  Contract start:      2023-09-05",
            "  Reference date:      2025-11-05",
            "  Last renewal:        2025-09-05",
            "  Next renewal:        2026-09-05",
            "  Regime:              POST_OCT2024",
            "  Scenario:            any_time",
            "  Notice ends:         2026-01-05",
            "  Earliest legal date: 2026-01-05",
            "  Requested:           2025-12-05",
        ];
        assert_eq!(reformed_any_time().explanation(), expected.join("\n"));
    }

    #[test]
    fn test_explanation_missed_legacy_notice() {
        let outcome = evaluate(TerminationRequest::new(ymd(2018, 5, 18)).with_reference_date(ymd(2020, 4, 18)));

        assert_eq!(outcome.summary_line(), "Earliest possible termination date: 2021-05-18.");
        let binding = outcome.explanation();
        let lines: Vec<&str> = binding.lines().collect();
        assert_eq!(
            lines,
            [
                "  Contract start:      2018-05-18",
                "  Reference date:      2020-04-18",
                "  Last renewal:        2019-05-18",
                "  Next renewal:        2020-05-18",
                "  Regime:              PRE_OCT2024",
                "  Scenario:            end_of_term",
                "  Notice ends:         2020-07-18",
                "  Earliest legal date: 2021-05-18",
            ]
        );
    }
}
