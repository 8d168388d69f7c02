//! Gesture release resolution.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::error::{NightrollError, Result};

/// Default horizontal drag distance (display units) that commits a swipe.
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 110.0;

/// Default horizontal release velocity (units/second) that commits a swipe.
pub const DEFAULT_VELOCITY_THRESHOLD: f64 = 600.0;

/// Direction of a committed swipe. Right means like, left means pass.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Direction {
    Left,
    Right,
}

/// Outcome of a released gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureDecision {
    CommitRight,
    CommitLeft,
    /// Threshold not crossed; the card snaps back and nothing changes.
    Revert,
}

impl GestureDecision {
    /// The committed direction, or `None` for [`GestureDecision::Revert`].
    pub fn direction(self) -> Option<Direction> {
        match self {
            GestureDecision::CommitRight => Some(Direction::Right),
            GestureDecision::CommitLeft => Some(Direction::Left),
            GestureDecision::Revert => None,
        }
    }

    pub fn is_commit(self) -> bool {
        self != GestureDecision::Revert
    }
}

/// Commit thresholds for a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeThresholds {
    pub distance: f64,
    pub velocity: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE_THRESHOLD,
            velocity: DEFAULT_VELOCITY_THRESHOLD,
        }
    }
}

impl SwipeThresholds {
    /// Creates thresholds, rejecting values that are not finite and positive.
    pub fn new(distance: f64, velocity: f64) -> Result<Self> {
        let thresholds = Self { distance, velocity };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(NightrollError::config(format!(
                "distance threshold must be a positive number, got {}",
                self.distance
            )));
        }
        if !self.velocity.is_finite() || self.velocity <= 0.0 {
            return Err(NightrollError::config(format!(
                "velocity threshold must be a positive number, got {}",
                self.velocity
            )));
        }
        Ok(())
    }

    /// Resolves a gesture from its horizontal offset and velocity at release.
    ///
    /// Total and side-effect free. Right is checked before left, so a release
    /// that crosses both (far right, flicked left) commits right. NaN inputs
    /// never cross a threshold.
    pub fn resolve(&self, offset: f64, velocity: f64) -> GestureDecision {
        if offset > self.distance || velocity > self.velocity {
            GestureDecision::CommitRight
        } else if offset < -self.distance || velocity < -self.velocity {
            GestureDecision::CommitLeft
        } else {
            GestureDecision::Revert
        }
    }
}
