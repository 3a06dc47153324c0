//! # Mesh Errors
//!
//! Error types for mesh building, snapshot I/O and host materialization.
//!
//! ## Error Policy
//!
//! - Face invariant violations are fatal and name the offending value and
//!   its position
//! - Duplicate vertices and import overwrites are advisories, reported
//!   through `tracing` and never through this type

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building, encoding or materializing a mesh.
///
/// ## Example
///
/// ```rust
/// use mesh_builder::{Face, MeshError};
///
/// match Face::new(vec![0, 1]) {
///     Err(MeshError::TooFewVertices { count, .. }) => assert_eq!(count, 2),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum MeshError {
    /// A face references fewer vertices than a polygon needs.
    #[error("Expected at least {min} vertices, received {count}")]
    TooFewVertices {
        /// Number of vertices supplied
        count: usize,
        /// Minimum number of vertices for a face
        min: usize,
    },

    /// A serialized face carries a negative vertex index.
    #[error("Received negative vertex index {index} at location {position}")]
    NegativeIndex {
        /// The offending index
        index: i64,
        /// Position of the index inside the face
        position: usize,
    },

    /// A face references the same vertex twice.
    #[error("Found duplicate vertex index {index} at location {position}")]
    DuplicateIndex {
        /// The repeated index
        index: usize,
        /// Position of the second occurrence inside the face
        position: usize,
    },

    /// A face index cannot be written as a signed wire index.
    #[error("Vertex index {index} at location {position} exceeds the serializable range")]
    IndexTooLarge {
        /// The offending index
        index: usize,
        /// Position of the index inside the face
        position: usize,
    },

    /// A face index does not resolve against the materialized vertices.
    #[error(
        "Face {face} references vertex index {index} at location {position}, \
         but only {vertex_count} vertices exist"
    )]
    IndexOutOfRange {
        /// Position of the face in the builder
        face: usize,
        /// The unresolvable index
        index: usize,
        /// Position of the index inside the face
        position: usize,
        /// Number of vertices created in the host
        vertex_count: usize,
    },

    /// The host mesh refused an operation.
    #[error("Host mesh error: {message}")]
    Host {
        /// Description supplied by the host
        message: String,
    },

    /// Snapshot file exceeds the loader limit.
    #[error("Snapshot file too large: {size} bytes (max: {max})")]
    SnapshotTooLarge {
        /// Size of the file on disk
        size: u64,
        /// Configured limit
        max: u64,
    },

    /// Snapshot could not be encoded or decoded.
    #[error("Snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Snapshot file could not be read or written.
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a host mesh error.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    /// Returns true for face invariant violations.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::TooFewVertices { .. }
                | Self::NegativeIndex { .. }
                | Self::DuplicateIndex { .. }
                | Self::IndexTooLarge { .. }
                | Self::IndexOutOfRange { .. }
        )
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::TooFewVertices { count: 2, min: 3 };
        assert_eq!(err.to_string(), "Expected at least 3 vertices, received 2");

        let err = MeshError::DuplicateIndex {
            index: 4,
            position: 2,
        };
        assert!(err.to_string().contains("duplicate vertex index 4"));
        assert!(err.to_string().contains("location 2"));

        let err = MeshError::NegativeIndex {
            index: -1,
            position: 0,
        };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_validation_classification() {
        assert!(MeshError::TooFewVertices { count: 0, min: 3 }.is_validation());
        assert!(!MeshError::host("boom").is_validation());
    }

    /// Errors must cross thread boundaries in host applications.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
