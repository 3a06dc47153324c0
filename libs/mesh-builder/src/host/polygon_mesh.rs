//! # Polygon Mesh
//!
//! In-memory host mesh with polygon faces and an edge table, mirroring the
//! editing structures of 3D editors: vertex lookup must be finalized before
//! faces can be created and a face over an existing vertex set is refused.

use super::{HostMesh, MeshBuffers};
use crate::error::{MeshError, MeshResult};
use crate::vertex::Vertex;
use config::constants::MIN_FACE_VERTICES;
use glam::DVec3;
use std::collections::HashSet;

/// A polygon mesh with vertices, faces and derived edges.
///
/// All geometry is stored in f64. Export to f32 only happens through
/// [`PolygonMesh::to_buffers`].
///
/// # Example
///
/// ```rust
/// use mesh_builder::{HostMesh, PolygonMesh, Vertex};
///
/// let mut mesh = PolygonMesh::new();
/// let a = mesh.create_vertex(Vertex::new(0.0, 0.0, 0.0)).unwrap();
/// let b = mesh.create_vertex(Vertex::new(1.0, 0.0, 0.0)).unwrap();
/// let c = mesh.create_vertex(Vertex::new(0.0, 1.0, 0.0)).unwrap();
/// mesh.finalize_vertices().unwrap();
/// mesh.create_face(&[a, b, c]).unwrap();
/// mesh.finalize_topology().unwrap();
///
/// assert_eq!(mesh.edge_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolygonMesh {
    /// Vertex positions
    positions: Vec<DVec3>,
    /// Polygons as vertex indices in winding order
    polygons: Vec<Vec<u32>>,
    /// Unique undirected edges, rebuilt by `finalize_topology`
    edges: Vec<[u32; 2]>,
    /// Sorted vertex sets of existing polygons
    polygon_keys: HashSet<Vec<u32>>,
    /// Vertex lookup is valid
    vertices_indexed: bool,
    /// Edge table is valid
    topology_indexed: bool,
}

impl PolygonMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.polygons.len()
    }

    /// Returns the number of edges from the last topology refresh.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the polygons.
    #[inline]
    pub fn polygons(&self) -> &[Vec<u32>] {
        &self.polygons
    }

    /// Returns the edges from the last topology refresh.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns true if the edge table reflects every polygon.
    #[inline]
    pub fn is_topology_indexed(&self) -> bool {
        self.topology_indexed
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Exports positions and fan-triangulated polygons as GPU buffers.
    pub fn to_buffers(&self) -> MeshBuffers {
        let mut buffers = MeshBuffers {
            vertices: Vec::with_capacity(self.positions.len() * 3),
            indices: Vec::new(),
        };

        for v in &self.positions {
            buffers.vertices.push(v.x as f32);
            buffers.vertices.push(v.y as f32);
            buffers.vertices.push(v.z as f32);
        }

        for polygon in &self.polygons {
            let anchor = polygon[0];
            for pair in polygon[1..].windows(2) {
                buffers.indices.extend_from_slice(&[anchor, pair[0], pair[1]]);
            }
        }

        buffers
    }

    fn rebuild_edges(&mut self) {
        let mut seen = HashSet::new();
        self.edges.clear();

        for polygon in &self.polygons {
            let next = polygon.iter().cycle().skip(1);
            for (&a, &b) in polygon.iter().zip(next) {
                let edge = [a.min(b), a.max(b)];
                if seen.insert(edge) {
                    self.edges.push(edge);
                }
            }
        }
    }
}

impl HostMesh for PolygonMesh {
    type VertexHandle = u32;

    fn create_vertex(&mut self, vertex: Vertex) -> MeshResult<u32> {
        let handle = u32::try_from(self.positions.len())
            .map_err(|_| MeshError::host("vertex count exceeds u32 handles"))?;
        self.positions.push(vertex.to_dvec3());
        self.vertices_indexed = false;
        self.topology_indexed = false;
        Ok(handle)
    }

    fn finalize_vertices(&mut self) -> MeshResult<()> {
        self.vertices_indexed = true;
        Ok(())
    }

    fn create_face(&mut self, corners: &[u32]) -> MeshResult<()> {
        if !self.vertices_indexed {
            return Err(MeshError::host(
                "vertex lookup is outdated, finalize vertices before creating faces",
            ));
        }
        if corners.len() < MIN_FACE_VERTICES {
            return Err(MeshError::host(format!(
                "face needs at least {MIN_FACE_VERTICES} vertices, received {}",
                corners.len()
            )));
        }
        if let Some(&handle) = corners.iter().find(|&&h| h as usize >= self.positions.len()) {
            return Err(MeshError::host(format!("unknown vertex handle {handle}")));
        }

        let mut key = corners.to_vec();
        key.sort_unstable();
        if key.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(MeshError::host("face has duplicate vertices"));
        }
        if !self.polygon_keys.insert(key) {
            return Err(MeshError::host("face already exists"));
        }

        self.polygons.push(corners.to_vec());
        self.topology_indexed = false;
        Ok(())
    }

    fn finalize_topology(&mut self) -> MeshResult<()> {
        self.rebuild_edges();
        self.topology_indexed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MeshBuilder;

    fn unit_quad() -> MeshBuilder {
        let mut builder = MeshBuilder::new();
        builder
            .add_face(&[
                Vertex::new(0.0, 0.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(1.0, 1.0, 0.0),
                Vertex::new(0.0, 1.0, 0.0),
            ])
            .unwrap();
        builder
    }

    #[test]
    fn test_mesh_new() {
        let mesh = PolygonMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_dump_quad() {
        let mut mesh = PolygonMesh::new();
        unit_quad().dump(&mut mesh).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.polygons(), &[vec![0, 1, 2, 3]]);
        assert_eq!(mesh.edge_count(), 4);
        assert!(mesh.is_topology_indexed());
    }

    #[test]
    fn test_shared_edge_counted_once() {
        let mut builder = unit_quad();
        builder
            .add_face(&[
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(2.0, 0.0, 0.0),
                Vertex::new(2.0, 1.0, 0.0),
                Vertex::new(1.0, 1.0, 0.0),
            ])
            .unwrap();

        let mut mesh = PolygonMesh::new();
        builder.dump(&mut mesh).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.edge_count(), 7);
    }

    #[test]
    fn test_face_before_vertex_finalize_is_refused() {
        let mut mesh = PolygonMesh::new();
        let a = mesh.create_vertex(Vertex::new(0.0, 0.0, 0.0)).unwrap();
        let b = mesh.create_vertex(Vertex::new(1.0, 0.0, 0.0)).unwrap();
        let c = mesh.create_vertex(Vertex::new(0.0, 1.0, 0.0)).unwrap();

        let err = mesh.create_face(&[a, b, c]).unwrap_err();
        assert!(matches!(err, MeshError::Host { .. }));
    }

    #[test]
    fn test_existing_face_is_refused() {
        let mut mesh = PolygonMesh::new();
        unit_quad().dump(&mut mesh).unwrap();
        mesh.finalize_vertices().unwrap();

        // Same vertex set in another winding
        let err = mesh.create_face(&[3, 2, 1, 0]).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_unknown_handle_is_refused() {
        let mut mesh = PolygonMesh::new();
        unit_quad().dump(&mut mesh).unwrap();
        mesh.finalize_vertices().unwrap();

        let err = mesh.create_face(&[0, 1, 9]).unwrap_err();
        assert!(err.to_string().contains("unknown vertex handle 9"));
    }

    #[test]
    fn test_bounding_box() {
        let mut mesh = PolygonMesh::new();
        mesh.create_vertex(Vertex::new(-1.0, -2.0, -3.0)).unwrap();
        mesh.create_vertex(Vertex::new(4.0, 5.0, 6.0)).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_to_buffers_fans_polygons() {
        let mut mesh = PolygonMesh::new();
        unit_quad().dump(&mut mesh).unwrap();

        let buffers = mesh.to_buffers();
        assert_eq!(buffers.vertex_count(), 4);
        assert_eq!(buffers.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(&buffers.vertices[3..6], &[1.0f32, 0.0, 0.0]);
    }
}
