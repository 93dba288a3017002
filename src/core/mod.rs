pub mod config;
pub mod error;
pub mod types;

pub use config::ComplexityConfig;
pub use error::{ComplexityError, Result};
