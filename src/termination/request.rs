//! Termination request input

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::serde_date;

/// The three dates a termination is evaluated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationRequest {
    /// When the contract first took effect
    #[serde(deserialize_with = "serde_date::deserialize")]
    pub contract_start: NaiveDate,

    /// Date notice is given; defaults to the injected current date
    #[serde(default, deserialize_with = "serde_date::option::deserialize")]
    pub reference_date: Option<NaiveDate>,

    /// Earliest date the holder wants the contract to end
    #[serde(default, deserialize_with = "serde_date::option::deserialize")]
    pub earliest_expected_termination: Option<NaiveDate>,
}

impl TerminationRequest {
    pub fn new(contract_start: NaiveDate) -> Self {
        Self {
            contract_start,
            reference_date: None,
            earliest_expected_termination: None,
        }
    }

    pub fn with_reference_date(mut self, reference_date: NaiveDate) -> Self {
        self.reference_date = Some(reference_date);
        self
    }

    pub fn with_earliest_expected_termination(mut self, date: NaiveDate) -> Self {
        self.earliest_expected_termination = Some(date);
        self
    }

    /// Reference date, falling back to `today`
    pub fn reference_or(&self, today: NaiveDate) -> NaiveDate {
        self.reference_date.unwrap_or(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_optional_fields() {
        let request: TerminationRequest =
            serde_json::from_str(r#"{"contract_start": "2023-09-05"}"#).unwrap();
        assert_eq!(request, TerminationRequest::new(NaiveDate::from_ymd_opt(2023, 9, 5).unwrap()));
    }

    #[test]
    fn test_json_rejects_unpadded_dates() {
        for json in [
            r#"{"contract_start": "2023-9-5"}"#,
            r#"{"contract_start": "2023-09-05", "reference_date": "2025-11-5"}"#,
            r#"{"contract_start": "2023-09-05", "earliest_expected_termination": "05-12-2025"}"#,
        ] {
            let err = serde_json::from_str::<TerminationRequest>(json).unwrap_err();
            assert!(err.to_string().contains("invalid date"), "{json}: {err}");
        }
    }

    #[test]
    fn test_reference_falls_back_to_today() {
        let start = NaiveDate::from_ymd_opt(2023, 9, 5).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        assert_eq!(TerminationRequest::new(start).reference_or(today), today);
        assert_eq!(
            TerminationRequest::new(start).with_reference_date(reference).reference_or(today),
            reference
        );
    }
}
