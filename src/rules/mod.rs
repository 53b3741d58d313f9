//! Termination rules: regimes, scenarios and the configurable rule set

mod regime;
pub mod loader;

pub use regime::{Regime, Scenario};
pub use loader::DEFAULT_RULES_PATH;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::serde_date;
use crate::error::RulesError;

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid constant date"),
    }
}

/// Date the reformed termination rules took effect
pub const REFORM_CUTOVER: NaiveDate = date(2024, 10, 1);

/// Earliest requested termination date the rules cover
pub const SUPPORTED_FROM: NaiveDate = date(2014, 4, 4);

/// How the reformed regime's first-year sub-case is recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FirstYearRule {
    /// Only the contract's first year overall (no implicit renewal yet)
    #[default]
    ContractStart,
    /// The first period after the contract entered the reformed regime
    FirstPeriodUnderNewRegime,
}

/// What happens when an anniversary-bound notice deadline is missed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissedNoticeRule {
    /// Termination moves to the following anniversary
    #[default]
    RollToFollowingAnniversary,
    /// A renewal on/after the cutover enters the reformed regime, so the
    /// contract can end any time after the reformed notice
    RenewIntoNewRegime,
}

/// Regulatory constants plus the interpretation switches for the
/// ambiguous parts of the law
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RuleSet {
    /// Renewals on/after this date fall under the reformed regime
    #[serde(deserialize_with = "serde_date::deserialize")]
    pub cutover: NaiveDate,

    /// Requested dates before this are rejected; `None` (an empty string in
    /// TOML) switches the range check off
    #[serde(deserialize_with = "serde_date::option::deserialize")]
    pub supported_from: Option<NaiveDate>,

    /// Notice before the reform, in months
    pub legacy_notice_months: u32,

    /// Notice after the reform, in months
    pub reformed_notice_months: u32,

    pub first_year: FirstYearRule,

    pub missed_notice: MissedNoticeRule,
}

impl RuleSet {
    /// Belgian rules as in force since October 1, 2024
    pub fn belgium_2024() -> Self {
        Self {
            cutover: REFORM_CUTOVER,
            supported_from: Some(SUPPORTED_FROM),
            legacy_notice_months: 3,
            reformed_notice_months: 2,
            first_year: FirstYearRule::default(),
            missed_notice: MissedNoticeRule::default(),
        }
    }

    /// Check notice periods fit inside a contract year
    pub fn validate(&self) -> Result<(), RulesError> {
        for (name, months) in [
            ("legacy_notice_months", self.legacy_notice_months),
            ("reformed_notice_months", self.reformed_notice_months),
        ] {
            if !(1..=11).contains(&months) {
                return Err(RulesError::Invalid(format!(
                    "{name} must be between 1 and 11, got {months}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::belgium_2024()
    }
}
