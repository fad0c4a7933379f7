//! Swipe Engine
//!
//! Composes the [`TrailRegistry`], [`SwipeAnalyzer`] and [`StalenessReaper`]
//! around one validated [`EngineConfig`].
//!
//! A typical frame loop:
//!
//! ```rust
//! use fingerswipe_core::{EngineConfig, EntityId, Observation, Point, SwipeEngine};
//!
//! let mut engine = SwipeEngine::new(EngineConfig::default()).unwrap();
//! let tracked = [EntityId(8), EntityId(12)];
//!
//! for frame in 0..30 {
//!     let now = frame as f64 / 30.0;
//!     let observations = [Observation::new(EntityId(8), Point::new(frame as f64 * 20.0, 100.0))];
//!
//!     engine.update(observations, now);
//!     for event in engine.check_swipes(&tracked, now) {
//!         println!("{} swiped {}", event.entity_id, event.direction);
//!     }
//! }
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, EngineConfig};
use crate::reaper::{ReapPolicy, StalenessReaper};
use crate::swipe::{SwipeAnalyzer, SwipeEvent};
use crate::trails::{EntityId, Trail, TrailInfo, TrailRegistry};
use crate::Point;

/// One entity's position in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub entity_id: EntityId,
    pub position: Point,
}

impl Observation {
    pub fn new(entity_id: EntityId, position: Point) -> Self {
        Observation {
            entity_id,
            position,
        }
    }
}

/// Swipe detection for any number of entities.
///
/// Single-threaded and passive: nothing happens between calls, and every
/// call takes the caller's current time.
#[derive(Debug, Clone)]
pub struct SwipeEngine {
    config: EngineConfig,
    registry: TrailRegistry,
    analyzer: SwipeAnalyzer,
    reaper: StalenessReaper,
}

impl SwipeEngine {
    /// Build an engine, rejecting configurations that could never detect a
    /// swipe or make no sense.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!("swipe engine: {:?}", config);

        Ok(SwipeEngine {
            config,
            registry: TrailRegistry::new(config.max_points),
            analyzer: SwipeAnalyzer::new(&config),
            reaper: StalenessReaper::new(&config),
        })
    }

    pub fn with_reap_policy(mut self, policy: ReapPolicy) -> Self {
        self.reaper = self.reaper.with_policy(policy);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &TrailRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TrailRegistry {
        &mut self.registry
    }

    pub fn add_point(&mut self, entity_id: EntityId, point: Point, now: f64) {
        self.registry.add_point(entity_id, point, now);
    }

    pub fn clear_trail(&mut self, entity_id: EntityId) {
        self.registry.clear_trail(entity_id);
    }

    pub fn clear_all(&mut self) {
        self.registry.clear_all();
    }

    pub fn get_trail(&self, entity_id: EntityId) -> Option<&Trail> {
        self.registry.get_trail(entity_id)
    }

    pub fn trail_info(&self, entity_id: EntityId, now: f64) -> Option<TrailInfo> {
        self.registry.trail_info(entity_id, now)
    }

    pub fn active_entities(&self, now: f64, activity_window: f64) -> BTreeSet<EntityId> {
        self.registry.active_entities(now, activity_window)
    }

    /// See [`SwipeAnalyzer::detect_swipe`]. Does not clear the trail.
    pub fn detect_swipe(&mut self, entity_id: EntityId, now: f64) -> Option<SwipeEvent> {
        self.analyzer.detect_swipe(&mut self.registry, entity_id, now)
    }

    /// See [`StalenessReaper::reap`]
    pub fn reap(&mut self, now: f64) -> Vec<EntityId> {
        self.reaper.reap(&mut self.registry, now)
    }

    /// Ingest one frame of observations, then reap stale trails.
    ///
    /// Returns the ids that were reaped.
    pub fn update<I>(&mut self, observations: I, now: f64) -> Vec<EntityId>
    where
        I: IntoIterator<Item = Observation>,
    {
        for observation in observations {
            self.registry.add_point(observation.entity_id, observation.position, now);
        }
        self.reap(now)
    }

    /// Detect swipes for the given entities, or for every known entity when
    /// `entity_ids` is empty.
    ///
    /// The trail of each entity that swiped is cleared so the same motion is
    /// not reported again once its cooldown runs out.
    pub fn check_swipes(&mut self, entity_ids: &[EntityId], now: f64) -> Vec<SwipeEvent> {
        let candidates: Vec<EntityId> = if entity_ids.is_empty() {
            self.registry.entity_ids().collect()
        } else {
            entity_ids.to_vec()
        };

        let mut events = Vec::new();
        for entity_id in candidates {
            if let Some(event) = self.detect_swipe(entity_id, now) {
                self.registry.clear_trail(entity_id);
                events.push(event);
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swipe::DirectionLabel;

    const FINGER: EntityId = EntityId(8);

    fn scenario_engine() -> SwipeEngine {
        SwipeEngine::new(EngineConfig {
            max_points: 10,
            min_distance: 40.0,
            min_velocity: 50.0,
            trail_timeout: 2.0,
            swipe_cooldown: 2.0,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = SwipeEngine::new(EngineConfig {
            max_points: 2,
            ..EngineConfig::default()
        });
        assert_eq!(result.unwrap_err(), ConfigError::TrailTooShort(2));
    }

    #[test]
    fn test_large_max_points_accepted() {
        let config = EngineConfig {
            max_points: usize::MAX / 2,
            ..EngineConfig::default()
        };
        let mut engine = SwipeEngine::new(config).unwrap();
        assert_eq!(engine.config().max_points, usize::MAX / 2);
        assert_eq!(engine.registry().max_points(), usize::MAX / 2);

        engine.update([Observation::new(FINGER, Point::new(0.0, 0.0))], 0.0);
        engine.update([Observation::new(FINGER, Point::new(10.0, 0.0))], 0.1);
        assert_eq!(engine.get_trail(FINGER).unwrap().len(), 2);
    }

    #[test]
    fn test_registry_mut_remove() {
        let mut engine = scenario_engine();
        assert_eq!(engine.config().swipe_cooldown, 2.0);
        engine.add_point(FINGER, Point::new(0.0, 0.0), 0.0);

        assert!(engine.registry_mut().remove(FINGER));
        assert!(engine.get_trail(FINGER).is_none());
        assert!(engine.registry().is_empty());
    }

    #[test]
    fn test_swipe_then_cooldown() {
        let mut engine = scenario_engine();
        engine.add_point(FINGER, Point::new(0.0, 0.0), 0.0);
        engine.add_point(FINGER, Point::new(30.0, 0.0), 0.2);
        engine.add_point(FINGER, Point::new(60.0, 0.0), 0.4);

        let event = engine.detect_swipe(FINGER, 0.4).unwrap();
        assert_eq!(event.direction, DirectionLabel::Right);
        assert_eq!(event.distance, 60.0);
        assert_eq!(event.smoothness, 1.0);

        // detect_swipe leaves the trail alone
        assert_eq!(engine.get_trail(FINGER).unwrap().len(), 3);

        engine.add_point(FINGER, Point::new(90.0, 0.0), 0.5);
        assert!(engine.detect_swipe(FINGER, 0.5).is_none());
    }

    #[test]
    fn test_two_samples_never_swipe() {
        let mut engine = scenario_engine();
        engine.add_point(FINGER, Point::new(0.0, 0.0), 0.0);
        engine.add_point(FINGER, Point::new(5.0, 0.0), 0.1);
        assert!(engine.detect_swipe(FINGER, 0.1).is_none());
        assert!(engine.check_swipes(&[], 0.1).is_empty());
    }

    #[test]
    fn test_check_swipes_clears_trail() {
        let mut engine = scenario_engine();
        let frames = [(0.0, 0.0), (30.0, 0.2), (60.0, 0.4)];
        let mut events = Vec::new();
        for (x, t) in frames {
            engine.update([Observation::new(FINGER, Point::new(x, 0.0))], t);
            events.extend(engine.check_swipes(&[FINGER, EntityId(12)], t));
        }

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].entity_id, FINGER);
        let trail = engine.get_trail(FINGER).unwrap();
        assert!(trail.is_empty());
        assert_eq!(trail.last_swipe_time(), 0.4);
    }

    #[test]
    fn test_check_swipes_all_entities() {
        let mut engine = scenario_engine();
        for (i, t) in [0.0, 0.1, 0.2].into_iter().enumerate() {
            let step = i as f64 * 40.0;
            engine.update(
                [
                    Observation::new(EntityId(8), Point::new(step, 0.0)),
                    Observation::new(EntityId(12), Point::new(300.0, 300.0 - step)),
                ],
                t,
            );
        }

        let events = engine.check_swipes(&[], 0.2);
        let directions: Vec<(EntityId, DirectionLabel)> =
            events.iter().map(|e| (e.entity_id, e.direction)).collect();
        assert_eq!(
            directions,
            vec![
                (EntityId(8), DirectionLabel::Right),
                (EntityId(12), DirectionLabel::Up)
            ]
        );
    }

    #[test]
    fn test_update_reaps_stale() {
        let mut engine = scenario_engine();
        engine.update([Observation::new(EntityId(4), Point::new(0.0, 0.0))], 0.0);
        engine.update([Observation::new(FINGER, Point::new(0.0, 0.0))], 1.0);

        let reaped = engine.update([Observation::new(FINGER, Point::new(1.0, 0.0))], 2.5);

        assert_eq!(reaped, vec![EntityId(4)]);
        assert!(engine.get_trail(EntityId(4)).unwrap().is_empty());
        assert_eq!(engine.get_trail(FINGER).unwrap().len(), 2);

        let active = engine.active_entities(2.5, 0.5);
        assert!(active.contains(&FINGER));
        assert!(!active.contains(&EntityId(4)));
    }

    #[test]
    fn test_forget_policy_resets_cooldown() {
        let mut engine = scenario_engine().with_reap_policy(ReapPolicy::Forget);
        engine.add_point(FINGER, Point::new(0.0, 0.0), 0.0);
        engine.add_point(FINGER, Point::new(30.0, 0.0), 0.2);
        engine.add_point(FINGER, Point::new(60.0, 0.0), 0.4);
        assert!(engine.detect_swipe(FINGER, 0.4).is_some());

        assert_eq!(engine.reap(2.5), vec![FINGER]);
        assert!(engine.get_trail(FINGER).is_none());

        // a returning entity starts with no cooldown
        engine.add_point(FINGER, Point::new(0.0, 0.0), 2.5);
        assert_eq!(
            engine.get_trail(FINGER).unwrap().last_swipe_time(),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_clear_all_and_trail_info() {
        let mut engine = scenario_engine();
        for (x, t) in [(0.0, 0.0), (10.0, 0.05), (20.0, 0.1)] {
            engine.add_point(FINGER, Point::new(x, 0.0), t);
        }
        let info = engine.trail_info(FINGER, 0.1).unwrap();
        assert_eq!(info.trail_length, 3);
        assert!(info.is_active);

        engine.clear_all();
        assert!(engine.trail_info(FINGER, 0.1).is_none());
        assert_eq!(engine.registry().len(), 1);
    }
}
