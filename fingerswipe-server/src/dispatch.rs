//! Action Dispatch
//!
//! Maps swipe directions to high-level actions and hands the result to an
//! [`ActionSink`]. The default mapping drives tab navigation:
//!
//! | Direction                          | Action     |
//! |------------------------------------|------------|
//! | right, down-right, up-right        | `next`     |
//! | left, down-left, up-left           | `previous` |
//! | up                                 | `up`       |
//! | down                               | `down`     |

use std::collections::HashMap;
use std::io::Write;

use fingerswipe_core::{DirectionLabel, SwipeEvent};
use serde::{Deserialize, Serialize};

use crate::error::DriverError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Next,
    Previous,
    Up,
    Down,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Next => "next",
            SwipeAction::Previous => "previous",
            SwipeAction::Up => "up",
            SwipeAction::Down => "down",
        }
    }
}

/// Direction to action policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMap {
    actions: HashMap<DirectionLabel, SwipeAction>,
}

impl Default for ActionMap {
    fn default() -> Self {
        use DirectionLabel::*;

        let actions = [
            (Right, SwipeAction::Next),
            (DownRight, SwipeAction::Next),
            (UpRight, SwipeAction::Next),
            (Left, SwipeAction::Previous),
            (DownLeft, SwipeAction::Previous),
            (UpLeft, SwipeAction::Previous),
            (Up, SwipeAction::Up),
            (Down, SwipeAction::Down),
        ]
        .into_iter()
        .collect();

        ActionMap { actions }
    }
}

impl ActionMap {
    /// A map with no bindings
    pub fn empty() -> Self {
        ActionMap {
            actions: HashMap::new(),
        }
    }

    pub fn bind(&mut self, direction: DirectionLabel, action: SwipeAction) {
        self.actions.insert(direction, action);
    }

    pub fn unbind(&mut self, direction: DirectionLabel) {
        self.actions.remove(&direction);
    }

    pub fn action_for(&self, direction: DirectionLabel) -> Option<SwipeAction> {
        self.actions.get(&direction).copied()
    }
}

/// A swipe and the action it was mapped to, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub event: SwipeEvent,
    pub action: Option<SwipeAction>,
}

/// Receives dispatched actions
pub trait ActionSink {
    fn dispatch(&mut self, record: &ActionRecord) -> Result<(), DriverError>;
}

/// Writes each record as one JSON line
pub struct JsonLineSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLineSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ActionSink for JsonLineSink<W> {
    fn dispatch(&mut self, record: &ActionRecord) -> Result<(), DriverError> {
        serde_json::to_writer(&mut self.writer, record).map_err(DriverError::Encode)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects records in memory
impl ActionSink for Vec<ActionRecord> {
    fn dispatch(&mut self, record: &ActionRecord) -> Result<(), DriverError> {
        self.push(record.clone());
        Ok(())
    }
}
