//! Native driver for the fingerswipe engine.
//!
//! Wires an observation source (a recorded JSON-lines file, stdin or a UDP
//! socket) to a [`fingerswipe_core::SwipeEngine`] and dispatches each
//! detected swipe as an action record.

pub mod cli;
pub mod dispatch;
pub mod driver;
pub mod error;
pub mod frame;
pub mod replay;
pub mod udp;

pub use dispatch::{ActionMap, ActionRecord, ActionSink, JsonLineSink, SwipeAction};
pub use driver::FrameDriver;
pub use error::DriverError;
pub use frame::{ObservationFrame, PointObservation};
pub use replay::{replay, ReplayStats};
