//! Scene input: waypoints and oriented obstacle extents

use serde::{Deserialize, Serialize};

use crate::core::error::{ComplexityError, Result};
use crate::core::types::{is_finite, relative_position, Point2};
use crate::spatial::Geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleRole {
    /// Physical object on the floor; expanded by the safety margin
    Ordinary,
    /// Boundary wall; only considered for vision
    Wall,
    /// Non-physical mission marker, never an obstacle
    Waypoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Point2,
    /// Rotation about the vertical axis, radians counter-clockwise
    #[serde(default)]
    pub heading: f64,
    pub half_width: f64,
    pub half_length: f64,
    pub role: ObstacleRole,
    #[serde(default)]
    pub complexity_weight: f64,
    #[serde(rename = "type")]
    pub type_label: String,
}

impl Obstacle {
    pub fn new(position: Point2, half_width: f64, half_length: f64, role: ObstacleRole, type_label: &str) -> Self {
        Self {
            position,
            heading: 0.0,
            half_width,
            half_length,
            role,
            complexity_weight: 0.0,
            type_label: type_label.to_string(),
        }
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_weight(mut self, complexity_weight: f64) -> Self {
        self.complexity_weight = complexity_weight;
        self
    }

    /// Rectangle corners expanded by `margin` on every side, in the order
    /// (+w,+l), (-w,+l), (-w,-l), (+w,-l) relative to the obstacle frame.
    pub fn footprint(&self, margin: f64) -> Geometry {
        let hw = self.half_width + margin;
        let hl = self.half_length + margin;
        let corners = [(hw, hl), (-hw, hl), (-hw, -hl), (hw, -hl)]
            .iter()
            .map(|&(dx, dy)| relative_position(self.position, self.heading, dx, dy))
            .collect();
        Geometry::new(corners, self.complexity_weight, self.type_label.clone())
    }

    /// Full extent along the longer side
    pub fn span(&self) -> f64 {
        2.0 * self.half_width.max(self.half_length)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_finite(self.position) || !self.heading.is_finite() {
            return Err(ComplexityError::InvalidScene(format!(
                "obstacle '{}' has a non-finite pose",
                self.type_label
            )));
        }
        if !(self.half_width >= 0.0 && self.half_length >= 0.0) {
            return Err(ComplexityError::InvalidScene(format!(
                "obstacle '{}' has a negative extent",
                self.type_label
            )));
        }
        if !(self.complexity_weight >= 0.0) {
            return Err(ComplexityError::InvalidScene(format!(
                "obstacle '{}' has a negative complexity weight",
                self.type_label
            )));
        }
        Ok(())
    }
}

/// Everything the analysis reads from a scene
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Mission order; the first entry is the ego start position
    pub waypoints: Vec<Point2>,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl Scene {
    pub fn new(waypoints: Vec<Point2>, obstacles: Vec<Obstacle>) -> Self {
        Self { waypoints, obstacles }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(content)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn validate(&self) -> Result<()> {
        if self.waypoints.is_empty() {
            return Err(ComplexityError::InvalidScene("scene has no waypoints".into()));
        }
        if let Some(p) = self.waypoints.iter().find(|p| !is_finite(**p)) {
            return Err(ComplexityError::InvalidScene(format!(
                "waypoint {:?} is not finite",
                p
            )));
        }
        self.obstacles.iter().try_for_each(Obstacle::validate)
    }

    pub fn with_role(&self, role: ObstacleRole) -> impl Iterator<Item = &Obstacle> + '_ {
        self.obstacles.iter().filter(move |o| o.role == role)
    }
}

/// Shortest and longest boundary wall in a scene
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WallSummary {
    pub width: f64,
    pub length: f64,
}

impl WallSummary {
    pub fn from_walls<'a>(walls: impl Iterator<Item = &'a Obstacle>) -> Self {
        let spans: Vec<f64> = walls.map(Obstacle::span).collect();
        if spans.is_empty() {
            tracing::warn!("scene has no boundary walls, wall summary is zero");
            return Self::default();
        }
        Self {
            width: spans.iter().copied().fold(f64::INFINITY, f64::min),
            length: spans.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}
