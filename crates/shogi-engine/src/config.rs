//! Rule configuration loading.
//!
//! [`RulesConfig`] gathers the tunable parts of the rules. Every field has a
//! default, so an empty TOML document yields the standard rules.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value parsed but is outside its allowed range.
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// How a check may be answered, and therefore what counts as mate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MateDetection {
    /// Only king moves answer a check; mate when the king has no safe square.
    #[default]
    KingEscape,
    /// Any move that leaves the king unattacked answers a check, including
    /// captures of the checker and interpositions; mate when none exists.
    AnyResponse,
}

/// Tunable rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Occurrences of the same position that end the game in a draw.
    pub repetition_limit: u32,
    /// Number of far ranks forming each color's promotion band.
    pub promotion_zone_depth: u8,
    /// Check resolution policy.
    pub mate_detection: MateDetection,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            repetition_limit: 3,
            promotion_zone_depth: 3,
            mate_detection: MateDetection::default(),
        }
    }
}

impl RulesConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] for malformed TOML and
    /// [`ConfigError::InvalidValue`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, plus
    /// anything [`Self::from_toml_str`] returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that every value is in its allowed range.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.repetition_limit < 2 {
            return Err(ConfigError::InvalidValue(format!(
                "repetition_limit must be at least 2, got {}",
                self.repetition_limit
            )));
        }
        if !(1..=8).contains(&self.promotion_zone_depth) {
            return Err(ConfigError::InvalidValue(format!(
                "promotion_zone_depth must be between 1 and 8, got {}",
                self.promotion_zone_depth
            )));
        }
        Ok(())
    }
}
