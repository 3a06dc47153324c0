//! # Grid Errors
//!
//! Error types for grid axes, field sampling and surface generation.

use config::constants::ConfigError;
use mesh_builder::MeshError;
use thiserror::Error;

/// Errors that can occur while generating a grid surface.
#[derive(Debug, Error)]
pub enum GridError {
    /// A breakpoint is NaN or infinite.
    #[error("Breakpoint {value} at location {position} is not finite")]
    NonFiniteBreakpoint {
        /// Position of the breakpoint on its axis
        position: usize,
        /// The offending value
        value: f64,
    },

    /// Breakpoints do not strictly increase.
    #[error(
        "Breakpoint {value} at location {position} does not exceed the previous breakpoint {previous}"
    )]
    NotIncreasing {
        /// Position of the breakpoint on its axis
        position: usize,
        /// Breakpoint before it
        previous: f64,
        /// The offending value
        value: f64,
    },

    /// The scalar field produced a value the snapshot format cannot carry.
    #[error("Scalar field returned {value} at ({x}, {y})")]
    NonFiniteSample {
        /// X coordinate of the sample
        x: f64,
        /// Y coordinate of the sample
        y: f64,
        /// The sampled value
        value: f64,
    },

    /// Grid configuration was rejected.
    #[error("Invalid grid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The mesh builder rejected a face.
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

/// Result type alias for grid operations.
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GridError::NotIncreasing {
            position: 3,
            previous: 1.0,
            value: 0.5,
        };
        assert!(err.to_string().contains("location 3"));
        assert!(err.to_string().contains("0.5"));

        let err = GridError::from(ConfigError::InvalidSamples(1));
        assert!(err.to_string().contains("samples"));
    }

    #[test]
    fn test_mesh_error_converts() {
        let err = GridError::from(MeshError::TooFewVertices { count: 2, min: 3 });
        assert!(matches!(err, GridError::Mesh(_)));
    }
}
