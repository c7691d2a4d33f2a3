//! Simulation configuration
//!
//! All tunables default to the constants of the classic fish tank. A config
//! is validated once, before any fish is spawned.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

pub const MIN_FISH_SIZE: f64 = 30.0;
pub const MAX_FISH_SIZE: f64 = 80.0;
/// Width over height of every fish sprite.
pub const FISH_ASPECT_RATIO: f64 = 5.0 / 3.0;
pub const MIN_HEALTH_DECAY: f64 = 0.01;
pub const MAX_HEALTH_DECAY: f64 = 0.03;
pub const FEED_AMOUNT: f64 = 20.0;
pub const MAX_HEALTH: f64 = 100.0;
pub const INITIAL_POPULATION: usize = 5;
pub const MAX_SPEED_X: f64 = 1.0;
pub const MAX_SPEED_Y: f64 = 0.5;
pub const MIN_SPEED_X: f64 = 0.5;
/// ~60 Hz
pub const FRAME_INTERVAL_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub min_size: f64,
    pub max_size: f64,
    pub aspect_ratio: f64,
    /// Enables health decay, death and feeding.
    pub health_enabled: bool,
    pub min_decay: f64,
    pub max_decay: f64,
    pub feed_amount: f64,
    pub max_health: f64,
    pub initial_population: usize,
    /// Horizontal speed is drawn from `[-max_speed_x, max_speed_x]`.
    pub max_speed_x: f64,
    /// Vertical speed is drawn from `[-max_speed_y, max_speed_y]`.
    pub max_speed_y: f64,
    /// Horizontal speeds below this magnitude are snapped up to it.
    pub min_speed_x: f64,
    pub frame_interval_ms: u64,
    /// Fixed seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_FISH_SIZE,
            max_size: MAX_FISH_SIZE,
            aspect_ratio: FISH_ASPECT_RATIO,
            health_enabled: true,
            min_decay: MIN_HEALTH_DECAY,
            max_decay: MAX_HEALTH_DECAY,
            feed_amount: FEED_AMOUNT,
            max_health: MAX_HEALTH,
            initial_population: INITIAL_POPULATION,
            max_speed_x: MAX_SPEED_X,
            max_speed_y: MAX_SPEED_Y,
            min_speed_x: MIN_SPEED_X,
            frame_interval_ms: FRAME_INTERVAL_MS,
            seed: None,
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::NonPositive { name, value })
    }
}

impl SimulationConfig {
    /// Config for the decoration-only variant: fish never decay or die.
    pub fn classic() -> Self {
        Self {
            health_enabled: false,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_size.is_finite()
            && self.max_size.is_finite()
            && self.min_size > 0.0
            && self.min_size <= self.max_size)
        {
            return Err(ConfigurationError::InvalidSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }

        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(ConfigurationError::InvalidAspectRatio(self.aspect_ratio));
        }

        if self.health_enabled
            && !(self.min_decay.is_finite()
                && self.max_decay.is_finite()
                && self.min_decay > 0.0
                && self.min_decay <= self.max_decay)
        {
            return Err(ConfigurationError::InvalidDecayRange {
                min: self.min_decay,
                max: self.max_decay,
            });
        }

        positive("feed_amount", self.feed_amount)?;
        positive("max_health", self.max_health)?;
        positive("max_speed_x", self.max_speed_x)?;
        positive("max_speed_y", self.max_speed_y)?;
        positive("min_speed_x", self.min_speed_x)?;

        if self.min_speed_x > self.max_speed_x {
            return Err(ConfigurationError::InvalidSpeedFloor {
                floor: self.min_speed_x,
                max: self.max_speed_x,
            });
        }

        if self.frame_interval_ms == 0 {
            return Err(ConfigurationError::ZeroFrameInterval);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_population, 5);
        assert!((config.aspect_ratio - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_size_range_rejected() {
        let config = SimulationConfig {
            min_size: 90.0,
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidSizeRange { min: 90.0, max: 80.0 })
        );
    }

    #[test]
    fn test_decay_range_ignored_without_health() {
        let config = SimulationConfig {
            min_decay: 0.0,
            ..SimulationConfig::classic()
        };
        assert!(config.validate().is_ok());

        let config = SimulationConfig {
            min_decay: 0.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidDecayRange { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulationConfig::from_json_str(r#"{ "initial_population": 12, "seed": 7 }"#)
            .unwrap();
        assert_eq!(config.initial_population, 12);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_size, MAX_FISH_SIZE);
    }

    #[test]
    fn test_bad_json_is_a_configuration_error() {
        assert!(matches!(
            SimulationConfig::from_json_str("{ not json"),
            Err(ConfigurationError::Parse(_))
        ));
        assert!(matches!(
            SimulationConfig::from_json_str(r#"{ "aspect_ratio": -1.0 }"#),
            Err(ConfigurationError::InvalidAspectRatio(_))
        ));
    }

    #[test]
    fn test_speed_floor_above_range_rejected() {
        let config = SimulationConfig {
            min_speed_x: 2.0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidSpeedFloor { .. })
        ));
    }
}
