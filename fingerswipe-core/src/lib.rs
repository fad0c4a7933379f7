//! Fingerswipe Core
//!
//! Platform-independent swipe gesture engine. This crate turns a stream of
//! 2-D point observations (one per tracked entity per frame) into discrete
//! directional swipe events.
//!
//! The crate performs no I/O and never reads a clock: every operation takes
//! the current time as an argument, so the whole engine is deterministic and
//! can be driven from a video loop, a replay file or a unit test alike.
//!
//! # Components
//!
//! - [`trails`]: per-entity bounded motion history ([`TrailRegistry`])
//! - [`swipe`]: motion metrics, direction classification and the
//!   [`SwipeAnalyzer`] gate chain
//! - [`reaper`]: eviction of entities that stopped reporting ([`StalenessReaper`])
//! - [`engine`]: the [`SwipeEngine`] facade composing the three per frame
//!
//! # Example
//!
//! ```rust
//! use fingerswipe_core::{DirectionLabel, EngineConfig, EntityId, Point, SwipeEngine};
//!
//! let config = EngineConfig {
//!     min_distance: 40.0,
//!     min_velocity: 50.0,
//!     ..EngineConfig::default()
//! };
//! let mut engine = SwipeEngine::new(config).unwrap();
//!
//! let finger = EntityId(8);
//! engine.add_point(finger, Point::new(0.0, 0.0), 0.0);
//! engine.add_point(finger, Point::new(30.0, 0.0), 0.2);
//! engine.add_point(finger, Point::new(60.0, 0.0), 0.4);
//!
//! let event = engine.detect_swipe(finger, 0.4).unwrap();
//! assert_eq!(event.direction, DirectionLabel::Right);
//! ```

pub mod config;
pub mod engine;
pub mod reaper;
pub mod swipe;
pub mod trails;

pub use config::{ConfigError, EngineConfig};
pub use engine::{Observation, SwipeEngine};
pub use reaper::{ReapPolicy, StalenessReaper};
pub use swipe::{
    classify_direction, path_length, smoothness, DirectionLabel, SwipeAnalyzer, SwipeEvent,
    SwipeMetrics,
};
pub use trails::{
    EntityId, Trail, TrailInfo, TrailRegistry, TrailSample, ACTIVE_TRAIL_WINDOW,
    DEFAULT_ACTIVITY_WINDOW,
};

/// 2-D position in frame pixels (x to the right, y downward).
pub type Point = nalgebra::Point2<f64>;
