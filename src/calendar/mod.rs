//! Calendar utilities: strict ISO date parsing and clamped month arithmetic
//!
//! All additions clamp the day to the last valid day of the target month,
//! so a Feb 29 anniversary falls on Feb 28 in common years.

mod arithmetic;
mod parse;
pub mod serde_date;

pub use arithmetic::{add_months, add_years, anniversary, last_anniversary_on_or_before, years_elapsed};
pub use parse::{parse_date, DATE_FORMAT};
