//! Month, year and anniversary arithmetic

use chrono::{Datelike, Months, NaiveDate};

use crate::error::TerminationError;

/// Add calendar months, clamping the day to the end of the target month
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate, TerminationError> {
    date.checked_add_months(Months::new(months))
        .ok_or(TerminationError::DateOutOfRange { date, months })
}

/// Add calendar years (Feb 29 + 1 year = Feb 28)
pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate, TerminationError> {
    let months = years
        .checked_mul(12)
        .ok_or(TerminationError::DateOutOfRange { date, months: u32::MAX })?;
    add_months(date, months)
}

/// The `years`-th anniversary of `start`.
///
/// Always measured from `start` itself so that leap-day contracts come back
/// to Feb 29 in leap years.
pub fn anniversary(start: NaiveDate, years: u32) -> Result<NaiveDate, TerminationError> {
    add_years(start, years)
}

/// Number of whole contract years between `start` and `reference`.
///
/// Returns 0 when `reference` precedes `start`.
pub fn years_elapsed(start: NaiveDate, reference: NaiveDate) -> Result<u32, TerminationError> {
    if reference <= start {
        return Ok(0);
    }

    // reference > start, so the year difference is non-negative
    let mut years = (reference.year() - start.year()) as u32;
    if anniversary(start, years)? > reference {
        years -= 1;
    }
    Ok(years)
}

/// Most recent anniversary of `start` not after `reference`, with its index
pub fn last_anniversary_on_or_before(
    start: NaiveDate,
    reference: NaiveDate,
) -> Result<(u32, NaiveDate), TerminationError> {
    let years = years_elapsed(start, reference)?;
    let renewal = anniversary(start, years)?;
    log::trace!("anniversary {years} of {start} is {renewal} (reference {reference})");
    Ok((years, renewal))
}
