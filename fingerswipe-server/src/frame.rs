//! Observation Frames
//!
//! Wire format produced by the external landmark detector. One frame per
//! JSON line (replay) or per datagram (UDP):
//!
//! ```json
//! {"timestamp": 0.4, "points": [{"id": 8, "x": 60.0, "y": 0.0}]}
//! ```
//!
//! `timestamp` is in seconds and optional; frames without one are stamped
//! by the driver's monotonic clock on arrival.

use fingerswipe_core::{EntityId, Observation, Point};
use serde::{Deserialize, Serialize};

/// One detected landmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointObservation {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
}

impl From<PointObservation> for Observation {
    fn from(p: PointObservation) -> Self {
        Observation::new(p.id, Point::new(p.x, p.y))
    }
}

/// All landmarks seen in one captured frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObservationFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(default)]
    pub points: Vec<PointObservation>,
}

impl ObservationFrame {
    pub fn parse(data: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(data)
    }

    pub fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        self.points.iter().map(|&p| p.into())
    }
}
