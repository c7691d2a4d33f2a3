//! ECS Components for aquarium entities

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

// ============================================================================
// Identity Components
// ============================================================================

/// Stable fish identity, never reused within a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FishId(pub u64);

// ============================================================================
// Fish Components
// ============================================================================

/// Top-left corner, container-relative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Displacement per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Only present on fish of the health-enabled variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitality {
    pub health: f64,
    /// Health lost per tick, fixed for the fish's lifetime.
    pub decay_rate: f64,
}

impl Vitality {
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Add `amount`, never exceeding `max`.
    pub fn restore(&mut self, amount: f64, max: f64) -> f64 {
        self.health = max.min(self.health + amount);
        self.health
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn from_velocity(vx: f64) -> Self {
        if vx > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    }

    /// Horizontal sprite scale: `1` facing right, `-1` mirrored.
    pub fn scale_x(self) -> f64 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

// ============================================================================
// Container & UI State
// ============================================================================

/// Inner dimensions of the tank. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    width: f64,
    height: f64,
}

impl ContainerBounds {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(ConfigurationError::InvalidBounds { width, height })
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Whether pointer interaction on a fish feeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FeedingMode {
    #[default]
    Normal,
    Feeding,
}

impl FeedingMode {
    pub fn toggled(self) -> Self {
        match self {
            FeedingMode::Normal => FeedingMode::Feeding,
            FeedingMode::Feeding => FeedingMode::Normal,
        }
    }
}

// ============================================================================
// Frame output
// ============================================================================

/// Everything the presentation side needs to draw one fish.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FishView {
    pub id: FishId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub facing: Facing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_follows_sign() {
        assert_eq!(Facing::from_velocity(0.5), Facing::Right);
        assert_eq!(Facing::from_velocity(-0.5), Facing::Left);
        // Zero is not "> 0"
        assert_eq!(Facing::from_velocity(0.0), Facing::Left);
        assert_eq!(Facing::Left.scale_x(), -1.0);
    }

    #[test]
    fn test_bounds_validation() {
        assert!(ContainerBounds::new(400.0, 300.0).is_ok());
        assert!(ContainerBounds::new(0.0, 300.0).is_err());
        assert!(ContainerBounds::new(400.0, f64::NAN).is_err());
        assert!(ContainerBounds::new(f64::INFINITY, 300.0).is_err());
    }

    #[test]
    fn test_restore_caps_at_max() {
        let mut vitality = Vitality {
            health: 95.0,
            decay_rate: 0.02,
        };
        assert_eq!(vitality.restore(20.0, 100.0), 100.0);
        assert_eq!(vitality.restore(20.0, 100.0), 100.0);
    }

    #[test]
    fn test_feeding_mode_toggle() {
        let mode = FeedingMode::default();
        assert_eq!(mode, FeedingMode::Normal);
        assert_eq!(mode.toggled(), FeedingMode::Feeding);
        assert_eq!(mode.toggled().toggled(), FeedingMode::Normal);
    }
}
