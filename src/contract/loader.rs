//! Load contracts from CSV and write evaluated rows back out
//!
//! Expected columns: `contract_id,contract_start,reference_date,earliest_expected_termination`.
//! The last two may be left empty. Only a structurally broken file fails the
//! load; bad dates are reported per row when the contract is evaluated.

use csv::{Reader, Writer};
use std::io::{Read, Write};
use std::path::Path;

use super::{ContractRecord, TerminationRow};
use crate::error::ContractLoadError;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    contract_id: String,
    contract_start: String,
    #[serde(default)]
    reference_date: Option<String>,
    #[serde(default)]
    earliest_expected_termination: Option<String>,
}

impl CsvRow {
    fn into_record(self) -> ContractRecord {
        let optional = |field: Option<String>| {
            field
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
        };

        ContractRecord {
            contract_id: self.contract_id.trim().to_string(),
            contract_start: self.contract_start.trim().to_string(),
            reference_date: optional(self.reference_date),
            earliest_expected_termination: optional(self.earliest_expected_termination),
        }
    }
}

/// Load all contracts from a CSV file
pub fn load_contracts<P: AsRef<Path>>(path: P) -> Result<Vec<ContractRecord>, ContractLoadError> {
    let reader = Reader::from_path(path)?;
    read_all(reader)
}

/// Load contracts from any reader (e.g., string buffer, request body)
pub fn load_contracts_from_reader<R: Read>(reader: R) -> Result<Vec<ContractRecord>, ContractLoadError> {
    read_all(Reader::from_reader(reader))
}

fn read_all<R: Read>(mut reader: Reader<R>) -> Result<Vec<ContractRecord>, ContractLoadError> {
    let mut contracts = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        contracts.push(row.into_record());
    }

    Ok(contracts)
}

/// Write evaluated rows as CSV with a header line
pub fn write_rows<W: Write>(writer: W, rows: &[TerminationRow]) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::TerminationCalculator;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const SAMPLE: &str = "\
contract_id,contract_start,reference_date,earliest_expected_termination
C-001,2023-09-05,2025-11-05,2025-12-05
C-002,2018-05-18,,
C-003,2020-01-01,2018-01-01,
";

    fn evaluate_all(csv: &str, default_reference: NaiveDate) -> Vec<TerminationRow> {
        let calculator = TerminationCalculator::default();
        load_contracts_from_reader(csv.as_bytes())
            .expect("Failed to load contracts")
            .iter()
            .map(|c| c.evaluate(&calculator, default_reference))
            .collect()
    }

    #[test]
    fn test_load_contracts_from_reader() {
        let contracts = load_contracts_from_reader(SAMPLE.as_bytes()).expect("Failed to load contracts");
        assert_eq!(contracts.len(), 3);

        assert_eq!(contracts[0].contract_id, "C-001");
        assert_eq!(contracts[0].reference_date.as_deref(), Some("2025-11-05"));
        assert_eq!(contracts[0].earliest_expected_termination.as_deref(), Some("2025-12-05"));

        assert_eq!(contracts[1].contract_start, "2018-05-18");
        assert_eq!(contracts[1].reference_date, None);
        assert_eq!(contracts[1].earliest_expected_termination, None);
    }

    #[test]
    fn test_malformed_date_fails_only_its_row() {
        let csv = "\
contract_id,contract_start,reference_date,earliest_expected_termination
A,2023-09-05,2025-11-05,
B,05-09-2023,,
C,2018-05-18,2025-02-20,
";
        let rows = evaluate_all(csv, ymd(2025, 11, 5));
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].contract_id, "A");
        assert_eq!(rows[0].termination_date, Some(ymd(2026, 1, 5)));
        assert_eq!(rows[0].error, None);

        assert_eq!(rows[1].contract_id, "B");
        assert_eq!(rows[1].termination_date, None);
        assert_eq!(rows[1].error.as_deref(), Some("invalid date: 05-09-2023 (expected YYYY-MM-DD)"));

        assert_eq!(rows[2].contract_id, "C");
        assert_eq!(rows[2].regime, Some(crate::Regime::PreOct2024));
        assert_eq!(rows[2].termination_date, Some(ymd(2026, 5, 18)));
        assert_eq!(rows[2].error, None);
    }

    #[test]
    fn test_broken_csv_fails_load() {
        let csv = "contract_id,contract_start,reference_date,earliest_expected_termination\nX-1,2023-09-05,2025-11-05,,extra\n";
        let err = load_contracts_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ContractLoadError::Csv(_)), "{err}");
    }

    #[test]
    fn test_load_sample_file() {
        let contracts = load_contracts("data/contracts_sample.csv").expect("Failed to load sample");
        assert!(!contracts.is_empty());
        assert!(contracts.iter().all(|c| !c.contract_id.is_empty()));
    }

    #[test]
    fn test_write_rows() {
        let rows = evaluate_all(SAMPLE, ymd(2025, 11, 5));

        let mut buffer = Vec::new();
        write_rows(&mut buffer, &rows).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "contract_id,contract_start,reference_date,last_renewal_date,regime,scenario,termination_date,error"
        );
        assert_eq!(lines[1], "C-001,2023-09-05,2025-11-05,2025-09-05,POST_OCT2024,any_time,2026-01-05,");
        assert_eq!(lines[2], "C-002,2018-05-18,2025-11-05,2025-05-18,POST_OCT2024,any_time,2026-01-05,");
        assert!(lines[3].starts_with("C-003,2020-01-01,2018-01-01,,,,,"), "{}", lines[3]);
        assert!(lines[3].contains("should precede the reference date"));
    }
}
