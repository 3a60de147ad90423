//! Configuration System
//!
//! Tuning values for the pet engine, loadable from a TOML file. Every field
//! falls back to its default when omitted, so a partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::needs::{MAX_LEVEL, MIN_LEVEL};
use crate::personality::DEFAULT_SMART_RELIEF_CHANCE;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "pet.toml";

/// Tuning parameters for a pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    /// Level every need starts at when the pet is (re)started
    pub initial_level: i32,
    /// Mood turns distressed when any need is at or below this
    pub distress_threshold: i32,
    /// A need is flagged as needing attention at or below this
    pub attention_threshold: i32,
    /// Per-need chance that a smart pet resists one point of decay
    pub smart_relief_chance: f64,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            initial_level: 50,
            distress_threshold: 20,
            attention_threshold: 20,
            smart_relief_chance: DEFAULT_SMART_RELIEF_CHANCE,
        }
    }
}

impl PetConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses and validates configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: PetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        match Self::from_file(DEFAULT_TUNING_PATH) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Could not load {}: {}. Using defaults.", DEFAULT_TUNING_PATH, e);
                Self::default()
            }
        }
    }

    /// Serializes the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks every value is within its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_LEVEL).contains(&self.initial_level) {
            return Err(ConfigError::Invalid {
                field: "initial_level",
                reason: format!("must be within 1..={}, got {}", MAX_LEVEL, self.initial_level),
            });
        }
        check_threshold("distress_threshold", self.distress_threshold)?;
        check_threshold("attention_threshold", self.attention_threshold)?;

        let chance = self.smart_relief_chance;
        if !chance.is_finite() || !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::Invalid {
                field: "smart_relief_chance",
                reason: format!("must be a probability within 0.0..=1.0, got {}", chance),
            });
        }
        Ok(())
    }
}

fn check_threshold(field: &'static str, value: i32) -> Result<(), ConfigError> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be within {}..={}, got {}", MIN_LEVEL, MAX_LEVEL, value),
        })
    }
}
