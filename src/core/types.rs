//! Plane coordinate helpers shared by the scene input and the persisted record

use geo::Coord;

/// A plane point as stored in scene and record files: `[x, y]`.
pub type Point2 = [f64; 2];

#[inline]
pub fn to_coord(p: Point2) -> Coord<f64> {
    Coord { x: p[0], y: p[1] }
}

#[inline]
pub fn to_point2(c: Coord<f64>) -> Point2 {
    [c.x, c.y]
}

/// Rotate `(dx, dy)` counter-clockwise by `heading` radians and offset it by `origin`.
pub fn relative_position(origin: Point2, heading: f64, dx: f64, dy: f64) -> Coord<f64> {
    let (sin, cos) = heading.sin_cos();
    Coord {
        x: origin[0] + dx * cos - dy * sin,
        y: origin[1] + dx * sin + dy * cos,
    }
}

/// True if both coordinates are finite
pub fn is_finite(p: Point2) -> bool {
    p[0].is_finite() && p[1].is_finite()
}
