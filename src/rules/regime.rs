//! Regulatory regimes and the termination scenarios they lead to

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::RuleSet;

/// Set of legal rules applicable to a contract, decided by its last renewal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Regime {
    /// Last renewed before the reform: end of term only, legacy notice
    PreOct2024,
    /// Renewed (or started) on/after the reform
    PostOct2024,
}

impl Regime {
    /// Select the regime from the most recent renewal date alone
    pub fn for_renewal(last_renewal: NaiveDate, rules: &RuleSet) -> Self {
        if last_renewal < rules.cutover {
            Regime::PreOct2024
        } else {
            Regime::PostOct2024
        }
    }

    /// Minimum notice period in months
    pub fn notice_months(&self, rules: &RuleSet) -> u32 {
        match self {
            Regime::PreOct2024 => rules.legacy_notice_months,
            Regime::PostOct2024 => rules.reformed_notice_months,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::PreOct2024 => "PRE_OCT2024",
            Regime::PostOct2024 => "POST_OCT2024",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf of the regime × sub-case decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Terminate at the end of the current period; rolls one year when notice is late
    EndOfTerm,
    /// Reformed contract in its first year: terminate at the first anniversary
    EndOfFirstYear,
    /// Reformed contract already renewed: any date after the notice period
    AnyTime,
    /// Anniversary-bound contract that missed its notice and renews into the
    /// reformed regime at that anniversary
    AnyTimeAfterRenewal,
}

impl Scenario {
    /// Decision table.
    ///
    /// `first_year` only matters for the reformed regime. `renews_into_reform`
    /// is set when an anniversary-bound notice was missed, the missed
    /// anniversary is on/after the cutover and the rule set treats that
    /// renewal as entering the reformed regime.
    pub fn select(regime: Regime, first_year: bool, renews_into_reform: bool) -> Self {
        match (regime, first_year, renews_into_reform) {
            (Regime::PostOct2024, false, _) => Scenario::AnyTime,
            (_, _, true) => Scenario::AnyTimeAfterRenewal,
            (Regime::PreOct2024, _, false) => Scenario::EndOfTerm,
            (Regime::PostOct2024, true, false) => Scenario::EndOfFirstYear,
        }
    }

    /// Whether termination can only take effect on an anniversary
    pub fn is_anniversary_bound(&self) -> bool {
        matches!(self, Scenario::EndOfTerm | Scenario::EndOfFirstYear)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::EndOfTerm => "end_of_term",
            Scenario::EndOfFirstYear => "end_of_first_year",
            Scenario::AnyTime => "any_time",
            Scenario::AnyTimeAfterRenewal => "any_time_after_renewal",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
