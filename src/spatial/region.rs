//! Regions: the grown shape of one waypoint-to-waypoint segment

use geo::{Area, Coord, Polygon};

use super::buffer::buffer_convex;
use super::geometry::{Geometry, Shape};
use super::grower::{grow, Growth};
use crate::core::config::{ComplexityConfig, AREA_TOLERANCE};
use crate::core::error::{ComplexityError, Result};

/// Geometric descriptor of one path segment. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    start: Coord<f64>,
    end: Coord<f64>,
    shape: Shape,
    included_geometries: Vec<Geometry>,
    vision_area: Polygon<f64>,
    in_vision_objects: Vec<Geometry>,
}

impl Region {
    /// Grow the region for `start -> end` over `obstacles`, then collect the
    /// leftover obstacles and walls that fall inside the vision buffer.
    pub fn build(
        start: Coord<f64>,
        end: Coord<f64>,
        obstacles: &[Geometry],
        walls: &[Geometry],
        config: &ComplexityConfig,
    ) -> Self {
        let Growth { shape, absorbed, .. } = grow(start, end, obstacles);
        let vision_area = buffer_convex(&shape, config.vision_margin, config.quadrant_segments);

        let in_vision_objects = obstacles
            .iter()
            .enumerate()
            .filter(|(index, _)| !absorbed.contains(index))
            .map(|(_, g)| g)
            .chain(walls.iter())
            .filter(|g| g.intersects(&vision_area))
            .cloned()
            .collect();

        let included_geometries = absorbed.iter().map(|&i| obstacles[i].clone()).collect();

        Self {
            start,
            end,
            shape,
            included_geometries,
            vision_area,
            in_vision_objects,
        }
    }

    /// Reassemble a region from stored parts without regrowing it
    pub fn from_parts(
        start: Coord<f64>,
        end: Coord<f64>,
        shape: Shape,
        included_geometries: Vec<Geometry>,
        vision_area: Polygon<f64>,
        in_vision_objects: Vec<Geometry>,
    ) -> Self {
        Self {
            start,
            end,
            shape,
            included_geometries,
            vision_area,
            in_vision_objects,
        }
    }

    pub fn start(&self) -> Coord<f64> {
        self.start
    }

    pub fn end(&self) -> Coord<f64> {
        self.end
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn included_geometries(&self) -> &[Geometry] {
        &self.included_geometries
    }

    pub fn vision_area(&self) -> &Polygon<f64> {
        &self.vision_area
    }

    pub fn in_vision_objects(&self) -> &[Geometry] {
        &self.in_vision_objects
    }

    /// Summed footprint area of every absorbed obstacle
    pub fn absorbed_area(&self) -> f64 {
        self.included_geometries.iter().map(Geometry::area).sum()
    }

    /// Complexity under the default `AREA_TOLERANCE`. A configured tolerance
    /// goes through [`complexity_with_tolerance`] instead.
    pub fn complexity(&self) -> Result<f64> {
        complexity_with_tolerance(self, AREA_TOLERANCE)
    }
}

/// Fraction of the region's hull covered by absorbed obstacles.
///
/// Zero for a bare segment or a zero-area hull. Fails if the absorbed area
/// exceeds the hull area by more than `AREA_TOLERANCE`; `SceneAnalyzer`
/// applies its configured `area_tolerance` through [`complexity_with_tolerance`].
pub fn complexity(region: &Region) -> Result<f64> {
    region.complexity()
}

/// As [`complexity`], with `tolerance` as the relative slack on the hull area
pub fn complexity_with_tolerance(region: &Region, tolerance: f64) -> Result<f64> {
    let hull_area = match region.shape.area() {
        Some(area) if area > 0.0 => area,
        _ => {
            tracing::debug!("degenerate region shape, complexity is zero");
            return Ok(0.0);
        }
    };

    let absorbed_area = region.absorbed_area();
    if absorbed_area > hull_area * (1.0 + tolerance) {
        return Err(ComplexityError::GeometryConsistency {
            absorbed_area,
            hull_area,
        });
    }

    Ok((absorbed_area / hull_area).min(1.0))
}

/// Hardest segment dominates; an empty mission scores zero
pub fn scene_complexity(complexities: &[f64]) -> f64 {
    complexities.iter().copied().fold(0.0, f64::max)
}

/// Area of the vision buffer
pub fn vision_area_size(region: &Region) -> f64 {
    region.vision_area.unsigned_area()
}
