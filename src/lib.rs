//! Region Complexity - path clutter measurement for simulated scenes
//!
//! Grows a convex region around each waypoint-to-waypoint route, absorbing
//! every obstacle footprint the region touches, and scores the region by how
//! much of it those obstacles cover.

pub mod core;
pub mod record;
pub mod scene;
pub mod spatial;

pub use crate::core::{ComplexityConfig, ComplexityError, Result};
pub use scene::{Obstacle, ObstacleRole, Scene, SceneAnalysis, SceneAnalyzer, WallSummary};
pub use spatial::{Geometry, Region, Shape};
