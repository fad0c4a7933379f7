//! Staleness Reaper
//!
//! Reclaims trails of entities that stopped reporting, e.g. a fingertip that
//! left the frame. Meant to be called once per cycle; calling it with
//! nothing stale is a no-op.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::trails::{EntityId, TrailRegistry};

/// What happens to an entity that has gone stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReapPolicy {
    /// Empty the samples; the entity keeps its cooldown memory
    #[default]
    ClearSamples,
    /// Drop the entity entirely, which also resets its cooldown
    Forget,
}

#[derive(Debug, Clone)]
pub struct StalenessReaper {
    trail_timeout: f64,
    policy: ReapPolicy,
}

impl StalenessReaper {
    pub fn new(config: &EngineConfig) -> Self {
        StalenessReaper {
            trail_timeout: config.trail_timeout,
            policy: ReapPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReapPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ReapPolicy {
        self.policy
    }

    /// Evict every entity not updated for longer than the trail timeout.
    ///
    /// Returns the evicted ids. Under [`ReapPolicy::ClearSamples`] only
    /// entities that still held samples are reported, so an idle entity is
    /// reported once rather than on every cycle.
    pub fn reap(&self, registry: &mut TrailRegistry, now: f64) -> Vec<EntityId> {
        let stale: Vec<EntityId> = registry
            .iter()
            .filter(|(_, trail)| now - trail.last_update_time() > self.trail_timeout)
            .filter(|(_, trail)| self.policy == ReapPolicy::Forget || !trail.is_empty())
            .map(|(id, _)| id)
            .collect();

        for &entity_id in &stale {
            match self.policy {
                ReapPolicy::ClearSamples => registry.clear_trail(entity_id),
                ReapPolicy::Forget => {
                    registry.remove(entity_id);
                }
            }
            log::trace!("reaped stale trail {} ({:?})", entity_id, self.policy);
        }

        stale
    }
}
