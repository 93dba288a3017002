//! Derived scalar descriptors reported for shapes and footprints

use geo::{Centroid, Coord, EuclideanDistance, Line, MinimumRotatedRect, Point, Polygon};

/// Exterior ring without its closing coordinate
pub fn ring_vertices(polygon: &Polygon<f64>) -> Vec<Coord<f64>> {
    let mut coords: Vec<Coord<f64>> = polygon.exterior().coords().copied().collect();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    coords
}

pub fn polygon_centroid(polygon: &Polygon<f64>) -> Option<Coord<f64>> {
    polygon.centroid().map(|p| p.0)
}

pub fn minimum_rotated_rect(polygon: &Polygon<f64>) -> Option<Polygon<f64>> {
    polygon.minimum_rotated_rect()
}

/// Smallest distance between two non-adjacent boundary features.
///
/// Considers every pair of distinct vertices and every vertex against each
/// edge it is not an endpoint of. `closed` adds the edge from the last vertex
/// back to the first. Returns `None` when no such pair exists, e.g. a
/// zero-length segment.
pub fn minimum_clearance(vertices: &[Coord<f64>], closed: bool) -> Option<f64> {
    let n = vertices.len();
    let mut edges: Vec<(usize, usize)> = (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect();
    if closed && n > 2 {
        edges.push((n - 1, 0));
    }

    let mut best: Option<f64> = None;
    let mut consider = |d: f64| {
        best = Some(match best {
            Some(b) => b.min(d),
            None => d,
        });
    };

    for i in 0..n {
        let p = Point::from(vertices[i]);

        for j in (i + 1)..n {
            if vertices[i] != vertices[j] {
                consider(p.euclidean_distance(&Point::from(vertices[j])));
            }
        }

        for &(a, b) in &edges {
            if a == i || b == i || vertices[a] == vertices[b] {
                continue;
            }
            consider(p.euclidean_distance(&Line::new(vertices[a], vertices[b])));
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{coord, polygon, Area};

    #[test]
    fn test_rectangle_clearance_is_short_side() {
        let rect = polygon![
            (x: 0.0, y: 0.0),
            (x: 4.0, y: 0.0),
            (x: 4.0, y: 1.0),
            (x: 0.0, y: 1.0),
        ];
        let clearance = minimum_clearance(&ring_vertices(&rect), true).unwrap();
        assert!((clearance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_clearance_is_length() {
        let verts = [coord! { x: 0.0, y: 0.0 }, coord! { x: 3.0, y: 4.0 }];
        assert!((minimum_clearance(&verts, false).unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_segment_has_no_clearance() {
        let verts = [coord! { x: 1.0, y: 1.0 }, coord! { x: 1.0, y: 1.0 }];
        assert_eq!(minimum_clearance(&verts, false), None);
    }

    #[test]
    fn test_rotated_rect_of_square_is_square() {
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0),
        ];
        let rect = minimum_rotated_rect(&square).unwrap();
        assert!((rect.unsigned_area() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_ring_vertices_drops_closing_point() {
        let tri = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 1.0)];
        assert_eq!(ring_vertices(&tri).len(), 3);
        let c = polygon_centroid(&tri).unwrap();
        assert!((c.x - 1.0 / 3.0).abs() < 1e-12);
    }
}
