//! Engine configuration
//!
//! Hosts normally use [`EngineConfig::default`]; the JSON loader exists for
//! embedders that tune the display width or precision policy.

use super::format::FormatPolicy;
use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for a [`super::engine::CalculatorEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum characters the display may hold
    pub max_display_len: usize,
    /// Result formatting policy
    pub format: FormatPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_display_len: Self::DEFAULT_MAX_DISPLAY_LEN,
            format: FormatPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Default display width
    pub const DEFAULT_MAX_DISPLAY_LEN: usize = 18;

    /// Narrowest usable display: the widest exponent form, `"-1e-308"`
    pub const MIN_DISPLAY_LEN: usize = 7;

    /// Create the default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display width
    #[must_use]
    pub const fn with_max_display_len(mut self, len: usize) -> Self {
        self.max_display_len = len;
        self
    }

    /// Set the formatting policy
    #[must_use]
    pub const fn with_format(mut self, format: FormatPolicy) -> Self {
        self.format = format;
        self
    }

    /// Parses and validates a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every field is usable by the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_display_len < Self::MIN_DISPLAY_LEN {
            return Err(ConfigError::invalid(format!(
                "max_display_len must be at least {}",
                Self::MIN_DISPLAY_LEN
            )));
        }
        let f = &self.format;
        if !(1..=17).contains(&f.significant_digits) {
            return Err(ConfigError::invalid(
                "significant_digits must be between 1 and 17",
            ));
        }
        if f.max_decimals > 15 {
            return Err(ConfigError::invalid("max_decimals must not exceed 15"));
        }
        if !(f.exponent_upper.is_finite() && f.exponent_upper > 0.0) {
            return Err(ConfigError::invalid(
                "exponent_upper must be a positive finite number",
            ));
        }
        if let Some(lower) = f.exponent_lower {
            if !(lower.is_finite() && lower > 0.0 && lower < f.exponent_upper) {
                return Err(ConfigError::invalid(
                    "exponent_lower must be positive and below exponent_upper",
                ));
            }
        }
        Ok(())
    }
}
