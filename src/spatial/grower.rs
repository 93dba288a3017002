//! Fixed-point region growth
//!
//! Starting from the straight segment between two waypoints, every footprint
//! the current shape touches is absorbed and the shape is replaced by the
//! convex hull of the route plus all absorbed rings. Growth stops after a full
//! pass absorbs nothing. Each successful pass absorbs at least one candidate,
//! so at most `candidates.len()` successful passes run.

use geo::{Area, Coord, ConvexHull, MultiPoint, Point, Polygon};

use super::geometry::{Geometry, Shape};

/// Result of one growth run
#[derive(Debug, Clone)]
pub struct Growth {
    pub shape: Shape,
    /// Indices into the candidate slice, in absorption order
    pub absorbed: Vec<usize>,
    /// Hull area after each pass that absorbed something
    pub pass_areas: Vec<f64>,
}

impl Growth {
    pub fn is_absorbed(&self, index: usize) -> bool {
        self.absorbed.contains(&index)
    }
}

/// Per-run view of a footprint. The absorbed flag lives only as long as one
/// `grow` call, so no reset is needed between segments.
struct Candidate<'a> {
    geometry: &'a Geometry,
    absorbed: bool,
}

pub fn grow(start: Coord<f64>, end: Coord<f64>, candidates: &[Geometry]) -> Growth {
    let mut pool: Vec<Candidate> = candidates
        .iter()
        .map(|geometry| Candidate {
            geometry,
            absorbed: false,
        })
        .collect();

    let mut points: Vec<Point<f64>> = vec![Point::from(start), Point::from(end)];
    let mut shape = Shape::segment(start, end);
    let mut absorbed = Vec::new();
    let mut pass_areas = Vec::new();

    loop {
        let mut absorbed_this_pass = 0;

        // Test against the shape as it stood at the start of the pass
        for (index, candidate) in pool.iter_mut().enumerate() {
            if candidate.absorbed || !shape.intersects(candidate.geometry.polygon()) {
                continue;
            }
            candidate.absorbed = true;
            points.extend(candidate.geometry.coords().into_iter().map(Point::from));
            absorbed.push(index);
            absorbed_this_pass += 1;
        }

        if absorbed_this_pass == 0 {
            break;
        }

        let hull = hull_of(&points);
        let area = hull.unsigned_area();
        tracing::debug!(
            pass = pass_areas.len() + 1,
            absorbed = absorbed_this_pass,
            hull_area = area,
            "region grew"
        );
        pass_areas.push(area);
        shape = Shape::Polygon(hull);
    }

    Growth {
        shape,
        absorbed,
        pass_areas,
    }
}

/// Convex hull whose ring always has at least three coordinates.
///
/// A hull of coincident points comes back as a two-coordinate ring, which
/// would read back as a segment; the closing coordinate is repeated instead.
fn hull_of(points: &[Point<f64>]) -> Polygon<f64> {
    let hull = MultiPoint::new(points.to_vec()).convex_hull();
    let (mut ring, _) = hull.into_inner();
    if let Some(&first) = ring.0.first() {
        while ring.0.len() < 3 {
            ring.0.push(first);
        }
    }
    Polygon::new(ring, vec![])
}
