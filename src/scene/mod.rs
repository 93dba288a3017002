//! Scene input and the mission-level driver

pub mod analysis;
pub mod obstacle;

pub use analysis::{SceneAnalysis, SceneAnalyzer};
pub use obstacle::{Obstacle, ObstacleRole, Scene, WallSummary};
