//! TOML rule set loader
//!
//! Every key is optional and falls back to the Belgian 2024 defaults.
//! Dates are quoted `YYYY-MM-DD` strings; `supported_from = ""` disables the
//! supported range check.

use std::fs;
use std::path::Path;

use super::RuleSet;
use crate::error::RulesError;

/// Default path to the shipped rule set
pub const DEFAULT_RULES_PATH: &str = "data/rules/belgium_2024.toml";

impl RuleSet {
    /// Parse and validate a rule set from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, RulesError> {
        let rules: RuleSet = toml::from_str(text)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load a rule set from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RulesError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let rules = Self::from_toml_str(&text)?;
        log::debug!("loaded rule set from {}: {:?}", path.display(), rules);
        Ok(rules)
    }

    /// Load the shipped rule set from the default location
    pub fn load_default() -> Result<Self, RulesError> {
        Self::from_path(DEFAULT_RULES_PATH)
    }
}
