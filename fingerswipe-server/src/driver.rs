//! Frame Driver
//!
//! Runs the engine once per observation frame: ingest the frame's points,
//! reap stale trails, detect swipes for the tracked entities and map every
//! swipe to an action.

use std::time::Instant;

use fingerswipe_core::{EntityId, SwipeEngine};

use crate::dispatch::{ActionMap, ActionRecord, ActionSink};
use crate::error::DriverError;
use crate::frame::ObservationFrame;

pub struct FrameDriver {
    engine: SwipeEngine,
    actions: ActionMap,
    /// Empty means every entity seen so far
    tracked: Vec<EntityId>,
    /// Clock for frames that carry no timestamp
    start_time: Instant,
    frames: u64,
    swipes: u64,
}

impl FrameDriver {
    pub fn new(engine: SwipeEngine, actions: ActionMap, tracked: Vec<EntityId>) -> Self {
        Self {
            engine,
            actions,
            tracked,
            start_time: Instant::now(),
            frames: 0,
            swipes: 0,
        }
    }

    pub fn engine(&self) -> &SwipeEngine {
        &self.engine
    }

    /// Frames processed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Swipes detected so far
    pub fn swipes(&self) -> u64 {
        self.swipes
    }

    fn elapsed(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Process one frame and return the resulting actions
    pub fn process_frame(&mut self, frame: &ObservationFrame) -> Vec<ActionRecord> {
        let now = frame.timestamp.unwrap_or_else(|| self.elapsed());
        self.frames += 1;

        let reaped = self.engine.update(frame.observations(), now);
        if !reaped.is_empty() {
            log::debug!("frame {}: reaped {:?}", self.frames, reaped);
        }

        let events = self.engine.check_swipes(&self.tracked, now);
        self.swipes += events.len() as u64;

        events
            .into_iter()
            .map(|event| {
                let action = self.actions.action_for(event.direction);
                log::info!(
                    "entity {} swiped {} ({:.1}px, {:.1}px/s) -> {}",
                    event.entity_id,
                    event.direction,
                    event.distance,
                    event.velocity,
                    action.map_or("no action", |a| a.as_str())
                );
                ActionRecord { event, action }
            })
            .collect()
    }

    /// Process one frame and hand its actions to `sink`
    pub fn drive<S: ActionSink>(
        &mut self,
        frame: &ObservationFrame,
        sink: &mut S,
    ) -> Result<usize, DriverError> {
        let records = self.process_frame(frame);
        for record in &records {
            sink.dispatch(record)?;
        }
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::SwipeAction;
    use crate::frame::PointObservation;
    use fingerswipe_core::{DirectionLabel, EngineConfig};

    fn frame(t: f64, points: &[(u32, f64, f64)]) -> ObservationFrame {
        ObservationFrame {
            timestamp: Some(t),
            points: points
                .iter()
                .map(|&(id, x, y)| PointObservation {
                    id: EntityId(id),
                    x,
                    y,
                })
                .collect(),
        }
    }

    fn driver(tracked: Vec<EntityId>) -> FrameDriver {
        let engine = SwipeEngine::new(EngineConfig {
            min_distance: 40.0,
            min_velocity: 50.0,
            ..EngineConfig::default()
        })
        .unwrap();
        FrameDriver::new(engine, ActionMap::default(), tracked)
    }

    #[test]
    fn test_left_swipe_maps_to_previous() {
        let mut driver = driver(vec![]);
        let mut sink: Vec<ActionRecord> = Vec::new();

        for (i, x) in [300.0, 250.0, 200.0, 150.0].into_iter().enumerate() {
            driver
                .drive(&frame(i as f64 * 0.1, &[(8, x, 100.0)]), &mut sink)
                .unwrap();
        }

        // detected on the third frame, then the trail was cleared
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].event.direction, DirectionLabel::Left);
        assert_eq!(sink[0].action, Some(SwipeAction::Previous));
        assert_eq!(driver.frames(), 4);
        assert_eq!(driver.swipes(), 1);
        assert_eq!(driver.engine().get_trail(EntityId(8)).unwrap().len(), 1);
    }

    #[test]
    fn test_untracked_entities_ignored() {
        let mut driver = driver(vec![EntityId(12)]);
        let mut records = Vec::new();
        for (i, y) in [0.0, 50.0, 100.0].into_iter().enumerate() {
            records.extend(driver.process_frame(&frame(i as f64 * 0.1, &[(8, 0.0, y)])));
        }
        assert!(records.is_empty());
        assert_eq!(driver.engine().get_trail(EntityId(8)).unwrap().len(), 3);
    }

    #[test]
    fn test_unbound_direction_has_no_action() {
        let engine = SwipeEngine::new(EngineConfig {
            min_distance: 40.0,
            min_velocity: 50.0,
            ..EngineConfig::default()
        })
        .unwrap();
        let mut driver = FrameDriver::new(engine, ActionMap::empty(), vec![]);

        let mut records = Vec::new();
        for (i, y) in [0.0, 50.0, 100.0].into_iter().enumerate() {
            records.extend(driver.process_frame(&frame(i as f64 * 0.1, &[(8, 0.0, y)])));
        }
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].event.direction, DirectionLabel::Down);
        assert_eq!(records[0].action, None);
    }

    #[test]
    fn test_frames_without_timestamp_use_clock() {
        let mut driver = driver(vec![]);
        let records = driver.process_frame(&ObservationFrame {
            timestamp: None,
            points: vec![PointObservation {
                id: EntityId(4),
                x: 1.0,
                y: 1.0,
            }],
        });
        assert!(records.is_empty());

        let trail = driver.engine().get_trail(EntityId(4)).unwrap();
        assert!(trail.last_update_time() >= 0.0);
    }
}
