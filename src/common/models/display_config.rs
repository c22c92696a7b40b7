use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::errors::common_errors::ConfigError;
use crate::constants::default_values::DefaultValues;

/// How a display is wired and how it starts up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of digits on the module, 1 to 8.
    pub digit_count: u8,

    /// Brightness level 0 to 7 used until the first intensity change.
    pub brightness: u8,

    /// Wait after every CLK/DIO transition.
    pub pulse_delay_us: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            digit_count: DefaultValues::DIGIT_COUNT,
            brightness: DefaultValues::BRIGHTNESS,
            pulse_delay_us: DefaultValues::PULSE_DELAY_US,
        }
    }
}

impl DisplayConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(json)
            .map(Self::normalized)
            .map_err(|e| ConfigError::Parse("E0201".to_owned(), e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| {
            ConfigError::Read("E0202".to_owned(), format!("{}: {}", path.display(), e))
        })?;

        Self::from_json_str(&json)
    }

    /// A digit count outside 1 to 8 falls back to the four digit default;
    /// brightness is clamped to 7.
    #[must_use]
    pub fn normalized(self) -> Self {
        let digit_count = if (1..=DefaultValues::MAX_DIGIT_COUNT).contains(&self.digit_count) {
            self.digit_count
        } else {
            log::warn!(
                "[E0203][DisplayConfig] digit count {} is not supported, using {}",
                self.digit_count,
                DefaultValues::DIGIT_COUNT
            );
            DefaultValues::DIGIT_COUNT
        };

        Self {
            digit_count,
            brightness: self.brightness.min(DefaultValues::MAX_BRIGHTNESS),
            pulse_delay_us: self.pulse_delay_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = DisplayConfig::from_json_str(r#"{ "pulse_delay_us": 50 }"#).unwrap();

        assert_eq!(
            config,
            DisplayConfig {
                digit_count: 4,
                brightness: 7,
                pulse_delay_us: 50,
            }
        );
    }

    #[test]
    fn unsupported_values_are_normalized() {
        let config =
            DisplayConfig::from_json_str(r#"{ "digit_count": 0, "brightness": 200 }"#).unwrap();
        assert_eq!(config.digit_count, 4);
        assert_eq!(config.brightness, 7);

        let config = DisplayConfig::from_json_str(r#"{ "digit_count": 9 }"#).unwrap();
        assert_eq!(config.digit_count, 4);

        let config = DisplayConfig::from_json_str(r#"{ "digit_count": 6 }"#).unwrap();
        assert_eq!(config.digit_count, 6);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DisplayConfig::from_json_str("{ digit_count: 4 ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(code, _) if code == "E0201"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = DisplayConfig::from_json_file(Path::new("/nonexistent/tm1637.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(code, _) if code == "E0202"));
    }

    #[test]
    fn serializes_back_to_json() {
        let json = serde_json::to_string(&DisplayConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"digit_count":4,"brightness":7,"pulse_delay_us":0}"#
        );
    }
}
