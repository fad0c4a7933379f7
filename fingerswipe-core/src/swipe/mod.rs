//! Swipe Gesture Classification
//!
//! This module turns an entity's trail into a swipe event, or nothing.
//!
//! # Architecture
//!
//! - **direction**: 8-way direction labels and angle classification
//! - **metrics**: pure geometric measures of a trail (path length, smoothness)
//! - **analyzer**: the gate chain (validity, cooldown, thresholds) and the
//!   emitted [`SwipeEvent`]
//!
//! # Usage
//!
//! ```rust
//! use fingerswipe_core::{EngineConfig, EntityId, Point, SwipeAnalyzer, TrailRegistry};
//!
//! let config = EngineConfig::default();
//! let analyzer = SwipeAnalyzer::new(&config);
//! let mut registry = TrailRegistry::new(config.max_points);
//!
//! registry.add_point(EntityId(8), Point::new(0.0, 0.0), 0.0);
//! registry.add_point(EntityId(8), Point::new(0.0, 40.0), 0.1);
//! registry.add_point(EntityId(8), Point::new(0.0, 80.0), 0.2);
//!
//! let event = analyzer.detect_swipe(&mut registry, EntityId(8), 0.2).unwrap();
//! assert_eq!(event.direction.as_str(), "down");
//! ```

mod analyzer;
mod direction;
mod metrics;

pub use analyzer::{SwipeAnalyzer, SwipeEvent, SwipeMetrics, MIN_SWIPE_SAMPLES};
pub use direction::{classify_direction, DirectionLabel, SECTOR_WIDTH_DEG};
pub use metrics::{path_length, smoothness};
