//! Tunable constants for region growth and vision buffering
//!
//! The defaults reproduce the reference behaviour: a 2-unit vision buffer and
//! a small fixed safety margin around ordinary obstacles. A TOML file may
//! override any subset of them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::{ComplexityError, Result};

/// Distance the vision area extends beyond a region's shape
pub const VISION_MARGIN: f64 = 2.0;

/// Safety margin added to each side of an ordinary obstacle's footprint
pub const OBSTACLE_MARGIN: f64 = 0.3;

/// Boundary walls are tested with their raw footprint
pub const WALL_MARGIN: f64 = 0.0;

/// Segments used to approximate a quarter circle when buffering
pub const QUADRANT_SEGMENTS: usize = 16;

/// Relative slack allowed when comparing absorbed area against hull area
pub const AREA_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexityConfig {
    /// Buffer distance for the vision area (world units)
    pub vision_margin: f64,

    /// Expansion applied to ordinary obstacles before intersection tests
    pub obstacle_margin: f64,

    /// Expansion applied to boundary walls
    pub wall_margin: f64,

    /// Quarter-circle resolution of the vision buffer
    ///
    /// Must be at least 1. The buffer is fully determined by this value, so
    /// two runs with the same config emit identical vision polygons.
    pub quadrant_segments: usize,

    /// Relative tolerance for the absorbed-area <= hull-area check
    pub area_tolerance: f64,

    /// Run per-segment growth on the rayon pool
    pub parallel: bool,
}

impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            vision_margin: VISION_MARGIN,
            obstacle_margin: OBSTACLE_MARGIN,
            wall_margin: WALL_MARGIN,
            quadrant_segments: QUADRANT_SEGMENTS,
            area_tolerance: AREA_TOLERANCE,
            parallel: false,
        }
    }
}

impl ComplexityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ComplexityConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let margins = [
            ("vision_margin", self.vision_margin),
            ("obstacle_margin", self.obstacle_margin),
            ("wall_margin", self.wall_margin),
        ];
        for (name, value) in margins {
            if !value.is_finite() || value < 0.0 {
                return Err(ComplexityError::InvalidConfig(format!(
                    "{} must be a non-negative finite number, got {}",
                    name, value
                )));
            }
        }

        // A zero buffer collapses the vision ring around a point route
        if self.vision_margin <= 0.0 {
            return Err(ComplexityError::InvalidConfig(
                "vision_margin must be positive".into(),
            ));
        }

        if self.quadrant_segments < 1 {
            return Err(ComplexityError::InvalidConfig(
                "quadrant_segments must be at least 1".into(),
            ));
        }

        if !self.area_tolerance.is_finite() || self.area_tolerance < 0.0 {
            return Err(ComplexityError::InvalidConfig(format!(
                "area_tolerance ({}) must be non-negative",
                self.area_tolerance
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ComplexityConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.vision_margin, 2.0);
        assert_eq!(config.quadrant_segments, QUADRANT_SEGMENTS);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ComplexityConfig::from_toml_str("obstacle_margin = 0.5\nparallel = true\n").unwrap();
        assert_eq!(config.obstacle_margin, 0.5);
        assert!(config.parallel);
        assert_eq!(config.vision_margin, VISION_MARGIN);
    }

    #[test]
    fn test_negative_margin_rejected() {
        let err = ComplexityConfig::from_toml_str("vision_margin = -1.0").unwrap_err();
        assert!(matches!(err, ComplexityError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_vision_margin_rejected() {
        let err = ComplexityConfig::from_toml_str("vision_margin = 0.0").unwrap_err();
        assert!(matches!(err, ComplexityError::InvalidConfig(_)));
        assert!(ComplexityConfig::from_toml_str("obstacle_margin = 0.0").is_ok());
    }

    #[test]
    fn test_zero_segments_rejected() {
        let config = ComplexityConfig {
            quadrant_segments: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let err = ComplexityConfig::from_toml_str("vision_margin = \"wide\"").unwrap_err();
        assert!(matches!(err, ComplexityError::TomlError(_)));
    }
}
