//! Entity Trail History
//!
//! This module stores recent position history for tracked entities
//! (fingertips, cursors, touch points), enabling swipe analysis.
//!
//! # Features
//!
//! - Fixed capacity per entity, oldest sample evicted first
//! - Lazy creation on the first point of an unseen entity
//! - Per-entity bookkeeping (last update, last accepted swipe) that
//!   survives clearing the samples
//!
//! # Example
//!
//! ```rust
//! use fingerswipe_core::trails::{EntityId, TrailRegistry};
//! use fingerswipe_core::Point;
//!
//! let mut registry = TrailRegistry::new(10);
//!
//! // Add a trail point
//! registry.add_point(EntityId(8), Point::new(120.0, 40.0), 0.033);
//!
//! // Get trail for entity
//! let trail = registry.get_trail(EntityId(8)).unwrap();
//! assert_eq!(trail.len(), 1);
//! ```

mod history;

pub use history::*;
