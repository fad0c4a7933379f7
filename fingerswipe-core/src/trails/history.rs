//! Per-entity bounded trail buffers and the registry that owns them.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::swipe::MIN_SWIPE_SAMPLES;
use crate::Point;

/// Window (s) used by [`TrailRegistry::active_entities`] callers that have
/// no better choice
pub const DEFAULT_ACTIVITY_WINDOW: f64 = 0.5;

/// Window (s) within which a trail counts as live in [`TrailInfo`]
pub const ACTIVE_TRAIL_WINDOW: f64 = 0.1;

/// Identity of a tracked point source, assigned by the detector.
///
/// For hand landmarks this is the landmark index (8 = index fingertip,
/// 12 = middle fingertip, ...); for touch input it is the slot id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        EntityId(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single observed position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    pub position: Point,
    /// Seconds on the caller's clock
    pub timestamp: f64,
}

/// Bounded, time-ordered history of one entity.
///
/// Samples are kept in insertion order. The buffer never holds more than
/// the registry's capacity.
/// Upper bound on the samples reserved for a new trail. Larger trails grow
/// on demand up to the registry's `max_points`.
const PREALLOCATED_SAMPLES: usize = 64;

#[derive(Debug, Clone)]
pub struct Trail {
    samples: VecDeque<TrailSample>,
    last_update_time: f64,
    last_swipe_time: f64,
}

impl Trail {
    fn with_capacity(capacity: usize) -> Self {
        Trail {
            samples: VecDeque::with_capacity(capacity.min(PREALLOCATED_SAMPLES)),
            last_update_time: f64::NEG_INFINITY,
            last_swipe_time: f64::NEG_INFINITY,
        }
    }

    /// Samples, oldest first
    pub fn samples(&self) -> impl ExactSizeIterator<Item = &TrailSample> + DoubleEndedIterator {
        self.samples.iter()
    }

    /// Positions only, oldest first
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point> + DoubleEndedIterator + '_ {
        self.samples.iter().map(|s| s.position)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&TrailSample> {
        self.samples.front()
    }

    pub fn last(&self) -> Option<&TrailSample> {
        self.samples.back()
    }

    /// Time of the most recent sample, kept after the samples are cleared
    pub fn last_update_time(&self) -> f64 {
        self.last_update_time
    }

    /// Time of the last accepted swipe, `-inf` if there never was one
    pub fn last_swipe_time(&self) -> f64 {
        self.last_swipe_time
    }

    /// Time between the first and last sample, 0 with fewer than two
    pub fn duration(&self) -> f64 {
        match (self.samples.front(), self.samples.back()) {
            (Some(first), Some(last)) if self.samples.len() >= 2 => {
                last.timestamp - first.timestamp
            }
            _ => 0.0,
        }
    }

    fn push(&mut self, sample: TrailSample, capacity: usize) {
        while self.samples.len() >= capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
        self.last_update_time = sample.timestamp;
    }

    fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Summary of an entity's trail, for status displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailInfo {
    pub entity_id: EntityId,
    pub trail_length: usize,
    pub current_position: Point,
    pub trail_duration: f64,
    /// Updated within [`ACTIVE_TRAIL_WINDOW`]
    pub is_active: bool,
}

/// Owns every entity's trail.
///
/// Entities are kept in a `BTreeMap` so iteration (and therefore event
/// order) is deterministic.
#[derive(Debug, Clone)]
pub struct TrailRegistry {
    max_points: usize,
    trails: BTreeMap<EntityId, Trail>,
}

impl TrailRegistry {
    /// Create an empty registry whose trails hold at most `max_points`
    /// samples. A capacity of 0 is treated as 1.
    pub fn new(max_points: usize) -> Self {
        TrailRegistry {
            max_points: max_points.max(1),
            trails: BTreeMap::new(),
        }
    }

    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Append an observation, creating the entity's trail on first sight.
    pub fn add_point(&mut self, entity_id: EntityId, point: Point, now: f64) {
        let capacity = self.max_points;
        let trail = self.trails.entry(entity_id).or_insert_with(|| {
            log::trace!("trail {}: new entity", entity_id);
            Trail::with_capacity(capacity)
        });
        trail.push(
            TrailSample {
                position: point,
                timestamp: now,
            },
            capacity,
        );
    }

    /// Empty the entity's samples but keep its cooldown bookkeeping.
    pub fn clear_trail(&mut self, entity_id: EntityId) {
        if let Some(trail) = self.trails.get_mut(&entity_id) {
            trail.clear();
        }
    }

    /// Empty every entity's samples
    pub fn clear_all(&mut self) {
        for trail in self.trails.values_mut() {
            trail.clear();
        }
    }

    /// Forget the entity completely, including its cooldown.
    ///
    /// Returns true if the entity was known.
    pub fn remove(&mut self, entity_id: EntityId) -> bool {
        self.trails.remove(&entity_id).is_some()
    }

    pub fn get_trail(&self, entity_id: EntityId) -> Option<&Trail> {
        self.trails.get(&entity_id)
    }

    /// Remember that a swipe was accepted for this entity at `now`
    pub fn record_swipe(&mut self, entity_id: EntityId, now: f64) {
        if let Some(trail) = self.trails.get_mut(&entity_id) {
            trail.last_swipe_time = now;
        }
    }

    /// Entities updated less than `activity_window` seconds before `now`
    pub fn active_entities(&self, now: f64, activity_window: f64) -> BTreeSet<EntityId> {
        self.trails
            .iter()
            .filter(|(_, trail)| now - trail.last_update_time < activity_window)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Every entity the registry has bookkeeping for
    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.trails.keys().copied()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (EntityId, &Trail)> {
        self.trails.iter().map(|(id, trail)| (*id, trail))
    }

    /// Number of known entities
    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Summary of an entity's trail, only for trails long enough to analyze
    pub fn trail_info(&self, entity_id: EntityId, now: f64) -> Option<TrailInfo> {
        let trail = self.trails.get(&entity_id)?;
        if trail.len() < MIN_SWIPE_SAMPLES {
            return None;
        }
        let current = trail.last()?;

        Some(TrailInfo {
            entity_id,
            trail_length: trail.len(),
            current_position: current.position,
            trail_duration: trail.duration(),
            is_active: now - trail.last_update_time < ACTIVE_TRAIL_WINDOW,
        })
    }
}
