//! # Host Meshes
//!
//! Capability interface for materializing a builder into a native mesh
//! structure, plus a reference in-memory implementation.
//!
//! ## Call Order
//!
//! ```text
//! create_vertex × N → finalize_vertices → create_face × M → finalize_topology
//! ```
//!
//! [`MeshBuilder::dump`](crate::MeshBuilder::dump) always calls the
//! capabilities in this order. Engine bindings implement [`HostMesh`]; the
//! builder depends on nothing else.

pub mod buffers;
pub mod polygon_mesh;

pub use buffers::MeshBuffers;
pub use polygon_mesh::PolygonMesh;

use crate::error::MeshResult;
use crate::vertex::Vertex;

/// Target structure that can receive vertices and faces.
///
/// # Example
///
/// ```rust
/// use mesh_builder::{HostMesh, MeshBuilder, MeshResult, Vertex};
///
/// /// Counts what it is given.
/// #[derive(Default)]
/// struct Counter {
///     vertices: usize,
///     faces: usize,
/// }
///
/// impl HostMesh for Counter {
///     type VertexHandle = usize;
///
///     fn create_vertex(&mut self, _vertex: Vertex) -> MeshResult<usize> {
///         self.vertices += 1;
///         Ok(self.vertices - 1)
///     }
///
///     fn finalize_vertices(&mut self) -> MeshResult<()> {
///         Ok(())
///     }
///
///     fn create_face(&mut self, _corners: &[usize]) -> MeshResult<()> {
///         self.faces += 1;
///         Ok(())
///     }
///
///     fn finalize_topology(&mut self) -> MeshResult<()> {
///         Ok(())
///     }
/// }
///
/// let mut builder = MeshBuilder::new();
/// builder.add_face(&[
///     Vertex::new(0.0, 0.0, 0.0),
///     Vertex::new(1.0, 0.0, 0.0),
///     Vertex::new(0.0, 1.0, 0.0),
/// ]).unwrap();
///
/// let mut counter = Counter::default();
/// builder.dump(&mut counter).unwrap();
/// assert_eq!((counter.vertices, counter.faces), (3, 1));
/// ```
pub trait HostMesh {
    /// Handle the host returns for a created vertex.
    type VertexHandle: Copy;

    /// Creates a native vertex with the given coordinates.
    fn create_vertex(&mut self, vertex: Vertex) -> MeshResult<Self::VertexHandle>;

    /// Makes every created vertex addressable by position.
    fn finalize_vertices(&mut self) -> MeshResult<()>;

    /// Creates a native polygon from handles in winding order.
    fn create_face(&mut self, corners: &[Self::VertexHandle]) -> MeshResult<()>;

    /// Refreshes edge and face indices after all faces exist.
    fn finalize_topology(&mut self) -> MeshResult<()>;
}
