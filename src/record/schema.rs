//! Persisted region record
//!
//! Field names and nesting are the on-disk contract; changing them breaks
//! previously written files.

use serde::{Deserialize, Serialize};

use crate::core::types::Point2;

/// Top-level document: wall summary plus one entry per path segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// Shortest boundary wall
    pub width: f64,
    /// Longest boundary wall
    pub length: f64,
    pub regions: Vec<RegionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub start: Point2,
    pub end: Point2,
    pub shape: ShapeRecord,
    pub vision_area: VisionRecord,
    pub included_geometries: Vec<GeometryRecord>,
    pub in_vision_objects: Vec<GeometryRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    /// Two endpoints for a segment, closed ring for a hull
    pub coords: Vec<Point2>,
    pub area: f64,
    pub perimeter: f64,
    pub centroid: Option<Point2>,
    pub minimum_clearance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_rotated_rectangle: Option<RectangleRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleRecord {
    pub area: f64,
    pub coords: Vec<Point2>,
    pub perimeter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionRecord {
    pub area: f64,
    pub coords: Vec<Point2>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    pub coords: Vec<Point2>,
    pub area: f64,
    pub perimeter: f64,
    pub centroid: Option<Point2>,
    pub minimum_clearance: Option<f64>,
    pub complexity: f64,
    #[serde(rename = "type")]
    pub type_label: String,
}
