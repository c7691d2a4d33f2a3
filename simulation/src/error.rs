//! Configuration errors
//!
//! The simulation itself has no fallible operations once it has been
//! configured; everything that can go wrong is caught here, at startup.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("container bounds must be finite and positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("container {width}x{height} cannot hold a fish of width {fish_width}")]
    ContainerTooSmall {
        width: f64,
        height: f64,
        fish_width: f64,
    },

    #[error("fish size range [{min}, {max}] is invalid")]
    InvalidSizeRange { min: f64, max: f64 },

    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f64),

    #[error("health decay range [{min}, {max}] is invalid")]
    InvalidDecayRange { min: f64, max: f64 },

    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("minimum horizontal speed {floor} exceeds the horizontal speed range {max}")]
    InvalidSpeedFloor { floor: f64, max: f64 },

    #[error("frame interval must be at least 1ms")]
    ZeroFrameInterval,

    #[error("config parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
