//! Region growth and complexity over obstacle footprints

pub mod buffer;
pub mod geometry;
pub mod grower;
pub mod metrics;
pub mod region;

pub use geometry::{Geometry, Shape};
pub use grower::{grow, Growth};
pub use region::{complexity, scene_complexity, Region};
