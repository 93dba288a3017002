//! Obstacle footprints and region shapes

use geo::{Area, Coord, EuclideanLength, Intersects, Line, LineString, Point, Polygon};

use super::metrics;

/// One obstacle's footprint in the plane, tagged for reporting
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    polygon: Polygon<f64>,
    complexity_weight: f64,
    type_label: String,
}

impl Geometry {
    /// Build a footprint from its boundary ring. The ring is closed if needed.
    pub fn new(coords: Vec<Coord<f64>>, complexity_weight: f64, type_label: impl Into<String>) -> Self {
        Self::from_polygon(
            Polygon::new(LineString::from(coords), vec![]),
            complexity_weight,
            type_label,
        )
    }

    pub fn from_polygon(polygon: Polygon<f64>, complexity_weight: f64, type_label: impl Into<String>) -> Self {
        Self {
            polygon,
            complexity_weight,
            type_label: type_label.into(),
        }
    }

    pub fn polygon(&self) -> &Polygon<f64> {
        &self.polygon
    }

    pub fn complexity_weight(&self) -> f64 {
        self.complexity_weight
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    /// Footprint area; zero for degenerate rings
    pub fn area(&self) -> f64 {
        self.polygon.unsigned_area()
    }

    pub fn perimeter(&self) -> f64 {
        self.polygon.exterior().euclidean_length()
    }

    /// Closed boundary ring, first coordinate repeated at the end
    pub fn coords(&self) -> Vec<Coord<f64>> {
        self.polygon.exterior().coords().copied().collect()
    }

    pub fn centroid(&self) -> Option<Coord<f64>> {
        metrics::polygon_centroid(&self.polygon)
    }

    pub fn minimum_clearance(&self) -> Option<f64> {
        metrics::minimum_clearance(&metrics::ring_vertices(&self.polygon), true)
    }

    pub fn intersects(&self, polygon: &Polygon<f64>) -> bool {
        self.polygon.intersects(polygon)
    }
}

/// The area a region occupies: the bare route or the hull grown around it
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Nothing was absorbed; start and end may coincide.
    Segment(Line<f64>),
    /// Convex hull of the route and every absorbed footprint.
    Polygon(Polygon<f64>),
}

impl Shape {
    pub fn segment(start: Coord<f64>, end: Coord<f64>) -> Self {
        Shape::Segment(Line::new(start, end))
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, Shape::Polygon(_))
    }

    /// Boundary coordinates: the two endpoints, or the closed hull ring
    pub fn coords(&self) -> Vec<Coord<f64>> {
        match self {
            Shape::Segment(line) => vec![line.start, line.end],
            Shape::Polygon(polygon) => polygon.exterior().coords().copied().collect(),
        }
    }

    /// Segment length or hull perimeter
    pub fn length(&self) -> f64 {
        match self {
            Shape::Segment(line) => line.euclidean_length(),
            Shape::Polygon(polygon) => polygon.exterior().euclidean_length(),
        }
    }

    /// Enclosed area. Segments have none.
    pub fn area(&self) -> Option<f64> {
        match self {
            Shape::Segment(_) => None,
            Shape::Polygon(polygon) => Some(polygon.unsigned_area()),
        }
    }

    pub fn centroid(&self) -> Option<Coord<f64>> {
        match self {
            Shape::Segment(_) => None,
            Shape::Polygon(polygon) => metrics::polygon_centroid(polygon),
        }
    }

    /// Smallest-area enclosing rectangle of a hull
    pub fn minimum_rotated_rect(&self) -> Option<Polygon<f64>> {
        match self {
            Shape::Segment(_) => None,
            Shape::Polygon(polygon) => metrics::minimum_rotated_rect(polygon),
        }
    }

    pub fn minimum_clearance(&self) -> Option<f64> {
        match self {
            Shape::Segment(line) => metrics::minimum_clearance(&[line.start, line.end], false),
            Shape::Polygon(polygon) => metrics::minimum_clearance(&metrics::ring_vertices(polygon), true),
        }
    }

    /// Boundary-inclusive intersection test against a footprint.
    ///
    /// A zero-length segment is tested as a single point.
    pub fn intersects(&self, polygon: &Polygon<f64>) -> bool {
        match self {
            Shape::Segment(line) if line.start == line.end => polygon.intersects(&Point::from(line.start)),
            Shape::Segment(line) => polygon.intersects(line),
            Shape::Polygon(hull) => polygon.intersects(hull),
        }
    }
}
