//! Engine Configuration
//!
//! Thresholds shared by the trail registry, the swipe analyzer and the
//! staleness reaper. A configuration is validated once, when an engine is
//! built from it; afterwards it is treated as immutable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest trail capacity that can ever produce a swipe
pub const MIN_TRAIL_CAPACITY: usize = 3;

/// Rejected configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_points must be at least 3, got {0}")]
    TrailTooShort(usize),

    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidThreshold { field: &'static str, value: f64 },

    #[error("min_smoothness must be in (0, 1], got {0}")]
    SmoothnessOutOfRange(f64),
}

/// Thresholds for trail tracking and swipe classification.
///
/// Distances are in frame pixels, velocities in pixels per second and all
/// times in seconds on the caller's clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Capacity of each entity's trail; oldest samples are dropped first
    pub max_points: usize,

    /// Minimum straight-line displacement (px) from first to last sample
    pub min_distance: f64,

    /// Minimum average speed (px/s) over the trail
    pub min_velocity: f64,

    /// Inactivity window (s) after which a trail is reaped
    pub trail_timeout: f64,

    /// Minimum spacing (s) between two accepted swipes of one entity
    pub swipe_cooldown: f64,

    /// Minimum ratio of displacement to path length
    pub min_smoothness: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_points: 10,
            min_distance: 50.0,
            min_velocity: 100.0,
            trail_timeout: 2.0,
            swipe_cooldown: 2.0,
            min_smoothness: 0.3,
        }
    }
}

impl EngineConfig {
    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_points < MIN_TRAIL_CAPACITY {
            return Err(ConfigError::TrailTooShort(self.max_points));
        }

        let thresholds = [
            ("min_distance", self.min_distance),
            ("min_velocity", self.min_velocity),
            ("trail_timeout", self.trail_timeout),
            ("swipe_cooldown", self.swipe_cooldown),
        ];
        for (field, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { field, value });
            }
        }

        // NaN fails both comparisons, so test for the accepted range
        if !(self.min_smoothness > 0.0 && self.min_smoothness <= 1.0) {
            return Err(ConfigError::SmoothnessOutOfRange(self.min_smoothness));
        }

        Ok(())
    }
}
