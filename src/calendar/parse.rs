//! Strict `YYYY-MM-DD` parsing

use chrono::NaiveDate;

use crate::error::TerminationError;

/// Format accepted on every input surface and used for all output
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a zero-padded ISO calendar date.
///
/// chrono alone accepts short years and unpadded fields, so the shape is
/// checked first: four year digits, two month digits, two day digits.
pub fn parse_date(input: &str) -> Result<NaiveDate, TerminationError> {
    let malformed = || TerminationError::MalformedDate { input: input.to_string() };

    let bytes = input.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(malformed());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| malformed())
}
