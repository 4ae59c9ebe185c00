//! Tunable constants for problem generation.

use math::atmosphere::InvalidConstant;
use math::{AtmosphereModel, RoundingPolicy};


#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Constants of the rule-of-thumb atmosphere.
    pub atmosphere: AtmosphereModel,
    /// How "approximately" answers are rounded.
    pub rounding:   RoundingPolicy,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed generator config")]
    Parse(#[source] serde_json::Error),
    #[error("invalid generator config")]
    Invalid(#[from] InvalidConstant),
}

impl GeneratorConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.atmosphere.validate()?;
        Ok(())
    }
}
