//! Swipe Analyzer
//!
//! Gates, evaluated in order, first failure wins:
//!
//! 1. the trail exists and holds at least [`MIN_SWIPE_SAMPLES`] samples
//! 2. the entity is out of its cooldown
//! 3. the trail spans a positive amount of time
//! 4. distance, velocity and smoothness all exceed their thresholds
//!
//! The first and last sample of the buffer are the swipe's start and end;
//! there is no search for a better sub-segment.

use nalgebra::distance;
use serde::{Deserialize, Serialize};

use super::direction::{classify_direction, DirectionLabel};
use super::metrics::smoothness;
use crate::config::EngineConfig;
use crate::trails::{EntityId, Trail, TrailRegistry};
use crate::Point;

/// Fewest samples a trail needs before it is analyzed
pub const MIN_SWIPE_SAMPLES: usize = 3;

/// Geometry of a trail from its first to its last sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeMetrics {
    pub start: Point,
    pub end: Point,
    pub start_time: f64,
    pub end_time: f64,
    /// Straight-line displacement (px)
    pub distance: f64,
    /// Average speed (px/s)
    pub velocity: f64,
    pub direction: DirectionLabel,
    pub smoothness: f64,
}

impl SwipeMetrics {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// An accepted swipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeEvent {
    pub entity_id: EntityId,
    pub start: Point,
    pub end: Point,
    pub distance: f64,
    pub velocity: f64,
    pub direction: DirectionLabel,
    pub smoothness: f64,
    pub duration: f64,
    /// Time of the last sample in the swipe
    pub timestamp: f64,
}

impl SwipeEvent {
    fn from_metrics(entity_id: EntityId, metrics: &SwipeMetrics) -> Self {
        SwipeEvent {
            entity_id,
            start: metrics.start,
            end: metrics.end,
            distance: metrics.distance,
            velocity: metrics.velocity,
            direction: metrics.direction,
            smoothness: metrics.smoothness,
            duration: metrics.duration(),
            timestamp: metrics.end_time,
        }
    }
}

/// Classifies trails as swipes.
///
/// Holds only thresholds; all per-entity state, including the cooldown
/// timestamp, lives in the [`TrailRegistry`].
#[derive(Debug, Clone)]
pub struct SwipeAnalyzer {
    min_distance: f64,
    min_velocity: f64,
    min_smoothness: f64,
    swipe_cooldown: f64,
}

impl SwipeAnalyzer {
    pub fn new(config: &EngineConfig) -> Self {
        SwipeAnalyzer {
            min_distance: config.min_distance,
            min_velocity: config.min_velocity,
            min_smoothness: config.min_smoothness,
            swipe_cooldown: config.swipe_cooldown,
        }
    }

    /// Measure a trail without applying thresholds or cooldown.
    ///
    /// Returns `None` if the trail is too short or spans no time.
    pub fn analyze(&self, trail: &Trail) -> Option<SwipeMetrics> {
        if trail.len() < MIN_SWIPE_SAMPLES {
            return None;
        }
        let first = trail.first()?;
        let last = trail.last()?;

        let duration = last.timestamp - first.timestamp;
        // Written as a negation so NaN durations are rejected too
        if !(duration > 0.0) {
            return None;
        }

        let points: Vec<Point> = trail.points().collect();
        let distance = distance(&first.position, &last.position);

        Some(SwipeMetrics {
            start: first.position,
            end: last.position,
            start_time: first.timestamp,
            end_time: last.timestamp,
            distance,
            velocity: distance / duration,
            direction: classify_direction(&first.position, &last.position),
            smoothness: smoothness(&points),
        })
    }

    /// True if the metrics clear every threshold
    pub fn is_valid_swipe(&self, metrics: &SwipeMetrics) -> bool {
        metrics.distance > self.min_distance
            && metrics.velocity > self.min_velocity
            && metrics.smoothness > self.min_smoothness
    }

    /// Run the gate chain for one entity.
    ///
    /// On success the entity's cooldown starts at `now`. The trail itself is
    /// left untouched; callers normally clear it to avoid detecting the same
    /// motion twice.
    pub fn detect_swipe(
        &self,
        registry: &mut TrailRegistry,
        entity_id: EntityId,
        now: f64,
    ) -> Option<SwipeEvent> {
        let trail = registry.get_trail(entity_id)?;
        if trail.len() < MIN_SWIPE_SAMPLES {
            return None;
        }

        let since_last = now - trail.last_swipe_time();
        if since_last < self.swipe_cooldown {
            log::trace!(
                "swipe {}: in cooldown ({:.3}s since last)",
                entity_id,
                since_last
            );
            return None;
        }

        let Some(metrics) = self.analyze(trail) else {
            log::trace!("swipe {}: trail spans no time", entity_id);
            return None;
        };

        if !self.is_valid_swipe(&metrics) {
            log::trace!(
                "swipe {}: rejected distance {:.1} velocity {:.1} smoothness {:.2}",
                entity_id,
                metrics.distance,
                metrics.velocity,
                metrics.smoothness
            );
            return None;
        }

        registry.record_swipe(entity_id, now);
        let event = SwipeEvent::from_metrics(entity_id, &metrics);
        log::debug!(
            "swipe {}: {} distance {:.1}px velocity {:.1}px/s smoothness {:.2}",
            entity_id,
            event.direction,
            event.distance,
            event.velocity,
            event.smoothness
        );
        Some(event)
    }
}
