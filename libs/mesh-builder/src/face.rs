//! # Face
//!
//! Polygon faces as ordered vertex index lists, plus their wire record.

use crate::error::{MeshError, MeshResult};
use config::constants::MIN_FACE_VERTICES;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A polygon defined by an ordered list of vertex indices.
///
/// Construction guarantees at least [`MIN_FACE_VERTICES`] indices, no
/// repeated index and no index above `i64::MAX`. Indices are not checked
/// against any vertex count; that happens when the face is materialized.
///
/// # Example
///
/// ```rust
/// use mesh_builder::Face;
///
/// let face = Face::new(vec![0, 1, 2, 3]).unwrap();
/// assert_eq!(face.vertex_count(), 4);
/// assert!(Face::new(vec![0, 1, 0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    vertex_indices: Vec<usize>,
}

impl Face {
    /// Creates a face, validating its size and index uniqueness.
    pub fn new(vertex_indices: Vec<usize>) -> MeshResult<Self> {
        if vertex_indices.len() < MIN_FACE_VERTICES {
            return Err(MeshError::TooFewVertices {
                count: vertex_indices.len(),
                min: MIN_FACE_VERTICES,
            });
        }

        let mut seen = HashSet::with_capacity(vertex_indices.len());
        for (position, &index) in vertex_indices.iter().enumerate() {
            if i64::try_from(index).is_err() {
                return Err(MeshError::IndexTooLarge { index, position });
            }
            if !seen.insert(index) {
                return Err(MeshError::DuplicateIndex { index, position });
            }
        }

        Ok(Self { vertex_indices })
    }

    /// Returns the vertex indices in winding order.
    #[inline]
    pub fn vertex_indices(&self) -> &[usize] {
        &self.vertex_indices
    }

    /// Returns the number of corners.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_indices.len()
    }

    /// Returns the largest referenced index.
    pub fn max_index(&self) -> usize {
        self.vertex_indices.iter().copied().max().unwrap_or(0)
    }
}

/// Serialized form of a [`Face`].
///
/// Indices are signed on the wire so that malformed documents carrying
/// negative values decode and are then rejected with a positioned error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaceRecord {
    /// Vertex indices in winding order.
    pub vertex_indices: Vec<i64>,
}

impl FaceRecord {
    /// Creates a record from raw indices.
    pub fn new(vertex_indices: Vec<i64>) -> Self {
        Self { vertex_indices }
    }
}

impl From<&Face> for FaceRecord {
    fn from(face: &Face) -> Self {
        Self {
            // Face::new bounds every index by i64::MAX
            vertex_indices: face
                .vertex_indices
                .iter()
                .map(|&i| i64::try_from(i).unwrap_or(i64::MAX))
                .collect(),
        }
    }
}

impl TryFrom<&FaceRecord> for Face {
    type Error = MeshError;

    fn try_from(record: &FaceRecord) -> MeshResult<Self> {
        if record.vertex_indices.len() < MIN_FACE_VERTICES {
            return Err(MeshError::TooFewVertices {
                count: record.vertex_indices.len(),
                min: MIN_FACE_VERTICES,
            });
        }

        let mut seen = HashSet::with_capacity(record.vertex_indices.len());
        let mut vertex_indices = Vec::with_capacity(record.vertex_indices.len());
        for (position, &raw) in record.vertex_indices.iter().enumerate() {
            let index = usize::try_from(raw)
                .map_err(|_| MeshError::NegativeIndex { index: raw, position })?;
            if !seen.insert(index) {
                return Err(MeshError::DuplicateIndex { index, position });
            }
            vertex_indices.push(index);
        }

        Ok(Self { vertex_indices })
    }
}
