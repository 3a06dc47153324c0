//! Mesh buffer export for GPU rendering.
//!
//! Triangle buffers produced from a materialized [`PolygonMesh`] using
//! `f32` precision.
//!
//! [`PolygonMesh`]: super::PolygonMesh

/// Mesh buffers suitable for GPU rendering.
///
/// Contains vertex positions and triangle indices in formats
/// compatible with WebGL/WebGPU.
///
/// # Examples
/// ```
/// use mesh_builder::{MeshBuilder, PolygonMesh, Vertex};
///
/// let mut builder = MeshBuilder::new();
/// builder.add_face(&[
///     Vertex::new(0.0, 0.0, 0.0),
///     Vertex::new(1.0, 0.0, 0.0),
///     Vertex::new(1.0, 1.0, 0.0),
///     Vertex::new(0.0, 1.0, 0.0),
/// ]).unwrap();
///
/// let mut host = PolygonMesh::new();
/// builder.dump(&mut host).unwrap();
/// let buffers = host.to_buffers();
///
/// assert_eq!(buffers.vertices.len(), 4 * 3); // 4 vertices * 3 components
/// assert_eq!(buffers.indices.len(), 2 * 3); // quad fans into 2 triangles
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    /// Uses `f32` for GPU compatibility.
    pub vertices: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_buffers_creation() {
        let buffers = MeshBuffers::new();
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.triangle_count(), 0);
    }

    #[test]
    fn test_counts_follow_flat_arrays() {
        let buffers = MeshBuffers {
            vertices: vec![0.0; 12],
            indices: vec![0, 1, 2, 0, 2, 3],
        };
        assert_eq!(buffers.vertex_count(), 4);
        assert_eq!(buffers.triangle_count(), 2);
    }
}
