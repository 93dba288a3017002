//! Region list <-> persisted record
//!
//! Serializing writes boundary coordinates together with derived scalars.
//! Loading rebuilds geometry from the coordinates and stored tags only; the
//! stored scalars are recomputed and compared, never trusted.

use geo::{Area, Coord, EuclideanLength, LineString, Polygon};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::schema::*;
use crate::core::error::{ComplexityError, Result};
use crate::core::types::{is_finite, to_coord, to_point2, Point2};
use crate::scene::{SceneAnalysis, WallSummary};
use crate::spatial::{Geometry, Region, Shape};

/// Loose tolerance for comparing stored and recomputed scalars
const DERIVED_TOLERANCE: f64 = 1e-6;

/// Regions restored from a record, with the scene's wall summary
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSet {
    pub walls: WallSummary,
    pub regions: Vec<Region>,
}

// ============================================================================
// SERIALIZE
// ============================================================================

pub fn serialize(regions: &[Region], walls: WallSummary) -> SceneRecord {
    SceneRecord {
        width: walls.width,
        length: walls.length,
        regions: regions.iter().map(region_record).collect(),
    }
}

pub fn from_analysis(analysis: &SceneAnalysis) -> SceneRecord {
    serialize(&analysis.regions, analysis.walls)
}

fn points(coords: &[Coord<f64>]) -> Vec<Point2> {
    coords.iter().copied().map(to_point2).collect()
}

fn region_record(region: &Region) -> RegionRecord {
    let shape = region.shape();
    let minimum_rotated_rectangle = shape.minimum_rotated_rect().map(|rect| RectangleRecord {
        area: rect.unsigned_area(),
        coords: points(&rect.exterior().0),
        perimeter: rect.exterior().euclidean_length(),
    });

    RegionRecord {
        start: to_point2(region.start()),
        end: to_point2(region.end()),
        shape: ShapeRecord {
            coords: points(&shape.coords()),
            area: shape.area().unwrap_or(0.0),
            perimeter: shape.length(),
            centroid: shape.centroid().map(to_point2),
            minimum_clearance: shape.minimum_clearance(),
            minimum_rotated_rectangle,
        },
        vision_area: VisionRecord {
            area: region.vision_area().unsigned_area(),
            coords: points(&region.vision_area().exterior().0),
        },
        included_geometries: region.included_geometries().iter().map(geometry_record).collect(),
        in_vision_objects: region.in_vision_objects().iter().map(geometry_record).collect(),
    }
}

fn geometry_record(geometry: &Geometry) -> GeometryRecord {
    GeometryRecord {
        coords: points(&geometry.coords()),
        area: geometry.area(),
        perimeter: geometry.perimeter(),
        centroid: geometry.centroid().map(to_point2),
        minimum_clearance: geometry.minimum_clearance(),
        complexity: geometry.complexity_weight(),
        type_label: geometry.type_label().to_string(),
    }
}

// ============================================================================
// DESERIALIZE
// ============================================================================

pub fn deserialize(record: &SceneRecord) -> Result<RegionSet> {
    let regions = record
        .regions
        .iter()
        .enumerate()
        .map(|(index, r)| region_from_record(index, r))
        .collect::<Result<Vec<_>>>()?;

    Ok(RegionSet {
        walls: WallSummary {
            width: record.width,
            length: record.length,
        },
        regions,
    })
}

fn checked_coords(index: usize, field: &str, coords: &[Point2], minimum: usize) -> Result<Vec<Coord<f64>>> {
    if coords.len() < minimum {
        return Err(ComplexityError::serialization_format(
            Some(index),
            format!("{} needs at least {} points, found {}", field, minimum, coords.len()),
        ));
    }
    if coords.iter().any(|p| !is_finite(*p)) {
        return Err(ComplexityError::serialization_format(
            Some(index),
            format!("{} has a non-finite coordinate", field),
        ));
    }
    Ok(coords.iter().copied().map(to_coord).collect())
}

fn geometry_from_record(index: usize, field: &str, record: &GeometryRecord) -> Result<Geometry> {
    let coords = checked_coords(index, field, &record.coords, 3)?;
    Ok(Geometry::new(coords, record.complexity, record.type_label.clone()))
}

fn region_from_record(index: usize, record: &RegionRecord) -> Result<Region> {
    for (field, p) in [("start", record.start), ("end", record.end)] {
        if !is_finite(p) {
            return Err(ComplexityError::serialization_format(Some(index), format!("{} is not finite", field)));
        }
    }

    let shape_coords = checked_coords(index, "shape", &record.shape.coords, 2)?;
    let shape = if shape_coords.len() > 2 {
        Shape::Polygon(Polygon::new(LineString::from(shape_coords), vec![]))
    } else {
        Shape::segment(shape_coords[0], shape_coords[1])
    };

    let vision_coords = checked_coords(index, "vision_area", &record.vision_area.coords, 3)?;
    let vision_area = Polygon::new(LineString::from(vision_coords), vec![]);

    let included = record
        .included_geometries
        .iter()
        .enumerate()
        .map(|(i, g)| geometry_from_record(index, &format!("included_geometries[{}]", i), g))
        .collect::<Result<Vec<_>>>()?;
    let in_vision = record
        .in_vision_objects
        .iter()
        .enumerate()
        .map(|(i, g)| geometry_from_record(index, &format!("in_vision_objects[{}]", i), g))
        .collect::<Result<Vec<_>>>()?;

    let region = Region::from_parts(
        to_coord(record.start),
        to_coord(record.end),
        shape,
        included,
        vision_area,
        in_vision,
    );
    check_derived(index, record, &region);
    Ok(region)
}

fn close(stored: f64, computed: f64) -> bool {
    (stored - computed).abs() <= DERIVED_TOLERANCE * (1.0 + computed.abs())
}

fn close_opt(stored: Option<f64>, computed: Option<f64>) -> bool {
    match (stored, computed) {
        (Some(a), Some(b)) => close(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn close_point(stored: Option<Point2>, computed: Option<Coord<f64>>) -> bool {
    match (stored, computed) {
        (Some(p), Some(c)) => close(p[0], c.x) && close(p[1], c.y),
        (None, None) => true,
        _ => false,
    }
}

/// Log, but accept, stored scalars that disagree with the rebuilt geometry.
/// Returns the number of disagreeing fields.
fn check_derived(index: usize, record: &RegionRecord, region: &Region) -> usize {
    let shape = region.shape();
    let mut mismatches = Vec::new();

    let scalars = [
        ("shape.area", close(record.shape.area, shape.area().unwrap_or(0.0))),
        ("shape.perimeter", close(record.shape.perimeter, shape.length())),
        ("shape.centroid", close_point(record.shape.centroid, shape.centroid())),
        (
            "shape.minimum_clearance",
            close_opt(record.shape.minimum_clearance, shape.minimum_clearance()),
        ),
        (
            "vision_area.area",
            close(record.vision_area.area, region.vision_area().unsigned_area()),
        ),
    ];
    mismatches.extend(scalars.iter().filter(|(_, ok)| !ok).map(|(field, _)| field.to_string()));

    let geometries = record
        .included_geometries
        .iter()
        .zip(region.included_geometries())
        .map(|g| ("included_geometries", g))
        .chain(
            record
                .in_vision_objects
                .iter()
                .zip(region.in_vision_objects())
                .map(|g| ("in_vision_objects", g)),
        );
    for (list, (stored, geometry)) in geometries {
        let fields = [
            ("area", close(stored.area, geometry.area())),
            ("perimeter", close(stored.perimeter, geometry.perimeter())),
            ("centroid", close_point(stored.centroid, geometry.centroid())),
            (
                "minimum_clearance",
                close_opt(stored.minimum_clearance, geometry.minimum_clearance()),
            ),
        ];
        for (field, ok) in fields {
            if !ok {
                mismatches.push(format!("{}[{}].{}", list, stored.type_label, field));
            }
        }
    }

    for field in &mismatches {
        tracing::warn!(region = index, field = %field, "stored value differs from geometry");
    }
    mismatches.len()
}

// ============================================================================
// FILE I/O
// ============================================================================

pub fn to_json_string(record: &SceneRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Top level parsed first so a bad region can be reported by index
#[derive(Deserialize)]
struct RawSceneRecord {
    width: f64,
    length: f64,
    regions: Vec<serde_json::Value>,
}

pub fn record_from_json_str(content: &str) -> Result<SceneRecord> {
    let raw: RawSceneRecord =
        serde_json::from_str(content).map_err(|e| ComplexityError::serialization_format(None, e.to_string()))?;

    let regions = raw
        .regions
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<RegionRecord>(value)
                .map_err(|e| ComplexityError::serialization_format(Some(index), e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SceneRecord {
        width: raw.width,
        length: raw.length,
        regions,
    })
}

pub fn from_json_str(content: &str) -> Result<RegionSet> {
    deserialize(&record_from_json_str(content)?)
}

pub fn save(path: &Path, regions: &[Region], walls: WallSummary) -> Result<()> {
    let json = to_json_string(&serialize(regions, walls))?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), regions = regions.len(), "region record written");
    Ok(())
}

pub fn load(path: &Path) -> Result<RegionSet> {
    let content = fs::read_to_string(path)?;
    from_json_str(&content)
}
