//! Polygonal buffering of convex shapes
//!
//! Region shapes are always convex (a segment, a point or a convex hull), so
//! the buffer is the hull of a circle swept around every vertex. Circle points
//! are generated at fixed angles, which keeps the output deterministic.

use geo::{Coord, ConvexHull, MultiPoint, Point, Polygon};
use std::f64::consts::TAU;

use super::geometry::Shape;
use super::metrics::ring_vertices;

/// Offset `shape` outward by `margin`, approximating each quarter circle with
/// `quadrant_segments` edges.
pub fn buffer_convex(shape: &Shape, margin: f64, quadrant_segments: usize) -> Polygon<f64> {
    let vertices = match shape {
        Shape::Segment(line) => vec![line.start, line.end],
        Shape::Polygon(polygon) => ring_vertices(polygon),
    };
    buffer_points(&vertices, margin, quadrant_segments)
}

fn buffer_points(vertices: &[Coord<f64>], margin: f64, quadrant_segments: usize) -> Polygon<f64> {
    let steps = 4 * quadrant_segments.max(1);
    let offsets: Vec<(f64, f64)> = (0..steps)
        .map(|k| {
            let angle = TAU * k as f64 / steps as f64;
            let (sin, cos) = angle.sin_cos();
            (margin * cos, margin * sin)
        })
        .collect();

    let points: Vec<Point<f64>> = vertices
        .iter()
        .flat_map(|v| offsets.iter().map(move |(dx, dy)| Point::new(v.x + dx, v.y + dy)))
        .collect();

    MultiPoint::new(points).convex_hull()
}
