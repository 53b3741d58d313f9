//! Strict serde deserializers for dates
//!
//! chrono's own `Deserialize` accepts unpadded fields such as `2023-9-5`;
//! these route every deserialized date through [`parse_date`] instead.
//!
//! ```ignore
//! #[serde(deserialize_with = "crate::calendar::serde_date::deserialize")]
//! contract_start: NaiveDate,
//! ```

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer};

use super::parse_date;

/// Deserialize a required `YYYY-MM-DD` date
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_date(&text).map_err(de::Error::custom)
}

/// Optional dates; `null` and the empty string both mean "not given"
pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)?.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => parse_date(text).map(Some).map_err(de::Error::custom),
        }
    }
}
