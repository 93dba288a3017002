use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComplexityError {
    /// Absorbed obstacle area exceeds the hull that absorbed it.
    #[error("Geometry consistency error: absorbed area {absorbed_area} exceeds hull area {hull_area}")]
    GeometryConsistency { absorbed_area: f64, hull_area: f64 },

    #[error("Serialization format error{}: {}", region_suffix(.region), .reason)]
    SerializationFormat { region: Option<usize>, reason: String },

    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

fn region_suffix(region: &Option<usize>) -> String {
    match region {
        Some(index) => format!(" in region {}", index),
        None => String::new(),
    }
}

impl ComplexityError {
    pub fn serialization_format(region: Option<usize>, reason: impl Into<String>) -> Self {
        Self::SerializationFormat {
            region,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ComplexityError>;
