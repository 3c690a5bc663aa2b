//! Engine configuration
//!
//! Configuration is optional: every field has a default, and a JSON file only
//! needs to name the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::format::{DEFAULT_MAX_FRACTION_DIGITS, MAX_FRACTION_DIGITS_LIMIT};
use crate::core::{CalcError, CalcResult};

/// What a digit keystroke does while the display shows `Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorEntryPolicy {
    /// Discard the error and start a new numeral
    #[default]
    StartFresh,
    /// Ignore digits until the error is cleared with AC or CE
    Blocked,
}

/// Configuration for a [`CalculatorEngine`](crate::core::CalculatorEngine)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fractional digits kept when formatting a non-integer result
    pub max_fraction_digits: u8,
    /// Digit entry behavior on the error display
    pub error_entry: ErrorEntryPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            error_entry: ErrorEntryPolicy::StartFresh,
        }
    }
}

impl EngineConfig {
    /// Create default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fractional digit limit
    #[must_use]
    pub fn with_max_fraction_digits(mut self, digits: u8) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Set the error entry policy
    #[must_use]
    pub fn with_error_entry(mut self, policy: ErrorEntryPolicy) -> Self {
        self.error_entry = policy;
        self
    }

    /// Parses a config from JSON text and validates it
    pub fn from_json(text: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Checks field ranges
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS_LIMIT {
            return Err(CalcError::Config(format!(
                "max_fraction_digits must be at most {MAX_FRACTION_DIGITS_LIMIT}, got {}",
                self.max_fraction_digits
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_fraction_digits, 10);
        assert_eq!(config.error_entry, ErrorEntryPolicy::StartFresh);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_max_fraction_digits(4)
            .with_error_entry(ErrorEntryPolicy::Blocked);
        assert_eq!(config.max_fraction_digits, 4);
        assert_eq!(config.error_entry, ErrorEntryPolicy::Blocked);
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{"error_entry": "blocked"}"#).unwrap();
        assert_eq!(config.error_entry, ErrorEntryPolicy::Blocked);
        assert_eq!(config.max_fraction_digits, 10);
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(EngineConfig::from_json("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let err = EngineConfig::from_json(r#"{"max_fraction_digits": 40}"#).unwrap_err();
        assert!(matches!(err, CalcError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = EngineConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, CalcError::ConfigFormat(_)));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_fraction_digits": 3}}"#).unwrap();
        let config = EngineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.max_fraction_digits, 3);
    }

    #[test]
    fn test_from_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CalcError::Io(_)));
    }

    #[test]
    fn test_serialize_round_trip_names() {
        let json = serde_json::to_string(&EngineConfig::default()).unwrap();
        assert!(json.contains("\"start_fresh\""));
    }
}
