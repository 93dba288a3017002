//! Persisted form of a scene's regions

pub mod codec;
pub mod schema;

pub use codec::{deserialize, from_json_str, load, save, serialize, to_json_string, RegionSet};
pub use schema::{GeometryRecord, RectangleRecord, RegionRecord, SceneRecord, ShapeRecord, VisionRecord};
