//! Per-segment region computation over a whole mission

use rayon::prelude::*;

use super::obstacle::{ObstacleRole, Scene, WallSummary};
use crate::core::config::ComplexityConfig;
use crate::core::error::Result;
use crate::core::types::to_coord;
use crate::spatial::region::{complexity_with_tolerance, scene_complexity};
use crate::spatial::{Geometry, Region};

/// Regions and scores for every consecutive waypoint pair
#[derive(Debug, Clone)]
pub struct SceneAnalysis {
    pub regions: Vec<Region>,
    pub complexities: Vec<f64>,
    pub walls: WallSummary,
}

impl SceneAnalysis {
    /// Complexity of the hardest segment
    pub fn max_complexity(&self) -> f64 {
        scene_complexity(&self.complexities)
    }
}

pub struct SceneAnalyzer {
    config: ComplexityConfig,
}

impl SceneAnalyzer {
    pub fn new(config: ComplexityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComplexityConfig {
        &self.config
    }

    /// Footprints built fresh for this run: (ordinary obstacles, walls)
    pub fn footprints(&self, scene: &Scene) -> (Vec<Geometry>, Vec<Geometry>) {
        let obstacles = scene
            .with_role(ObstacleRole::Ordinary)
            .map(|o| o.footprint(self.config.obstacle_margin))
            .collect();
        let walls = scene
            .with_role(ObstacleRole::Wall)
            .map(|o| o.footprint(self.config.wall_margin))
            .collect();
        (obstacles, walls)
    }

    pub fn analyze(&self, scene: &Scene) -> Result<SceneAnalysis> {
        self.config.validate()?;
        scene.validate()?;

        let (obstacles, walls) = self.footprints(scene);
        let segments: Vec<_> = scene.waypoints.windows(2).map(|w| (w[0], w[1])).collect();

        let build = |&(start, end): &([f64; 2], [f64; 2])| {
            Region::build(to_coord(start), to_coord(end), &obstacles, &walls, &self.config)
        };
        let regions: Vec<Region> = if self.config.parallel {
            segments.par_iter().map(build).collect()
        } else {
            segments.iter().map(build).collect()
        };

        let mut complexities = Vec::with_capacity(regions.len());
        for (index, region) in regions.iter().enumerate() {
            let value = complexity_with_tolerance(region, self.config.area_tolerance).map_err(|err| {
                tracing::error!(segment = index, "{}", err);
                err
            })?;
            tracing::debug!(
                segment = index,
                absorbed = region.included_geometries().len(),
                in_vision = region.in_vision_objects().len(),
                complexity = value,
                "segment complete"
            );
            complexities.push(value);
        }

        let analysis = SceneAnalysis {
            regions,
            complexities,
            walls: WallSummary::from_walls(scene.with_role(ObstacleRole::Wall)),
        };
        tracing::info!(
            segments = analysis.regions.len(),
            max_complexity = analysis.max_complexity(),
            "scene complexity computed"
        );
        Ok(analysis)
    }
}

impl Default for SceneAnalyzer {
    fn default() -> Self {
        Self::new(ComplexityConfig::default())
    }
}
