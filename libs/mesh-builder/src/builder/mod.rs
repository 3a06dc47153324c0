//! # Mesh Builder
//!
//! Incremental mesh accumulator with exact-match vertex deduplication.
//!
//! ## Insertion Paths
//!
//! - [`MeshBuilder::add_vertex`]: verbose, warns when the vertex already exists
//! - [`MeshBuilder::add_face`]: quiet, shared corners between faces are expected
//!
//! ## Failure Policy
//!
//! `add_face` and `import_data` validate everything before mutating. A
//! rejected face leaves no orphan vertices behind and a rejected snapshot
//! leaves the previous contents in place.

use crate::error::{MeshError, MeshResult};
use crate::face::{Face, FaceRecord};
use crate::host::HostMesh;
use crate::snapshot::MeshSnapshot;
use crate::vertex::Vertex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, warn};

// =============================================================================
// MESH BUILDER
// =============================================================================

/// Accumulates unique vertices and validated faces.
///
/// Vertex order is index order: faces reference vertices by position, so
/// the first inserted vertex is index 0 and so on.
///
/// # Example
///
/// ```rust
/// use mesh_builder::{MeshBuilder, Vertex};
///
/// let mut builder = MeshBuilder::new();
/// builder.add_face(&[
///     Vertex::new(0.0, 0.0, 0.0),
///     Vertex::new(1.0, 0.0, 0.0),
///     Vertex::new(1.0, 1.0, 0.0),
/// ]).unwrap();
/// builder.add_face(&[
///     Vertex::new(0.0, 0.0, 0.0),
///     Vertex::new(1.0, 1.0, 0.0),
///     Vertex::new(0.0, 1.0, 0.0),
/// ]).unwrap();
///
/// assert_eq!(builder.vertex_count(), 4);
/// assert_eq!(builder.faces()[1].vertex_indices(), &[0, 2, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshBuilder {
    /// Unique vertices in index order
    vertices: Vec<Vertex>,
    /// Faces in insertion order
    faces: Vec<Face>,
    /// Vertex -> index, derived from `vertices`
    vertex_cache: HashMap<Vertex, usize>,
}

impl MeshBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            vertex_cache: HashMap::with_capacity(vertex_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the builder holds neither vertices nor faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Returns the vertices in index order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the faces in insertion order.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Looks up the index assigned to a vertex.
    #[inline]
    pub fn index_of(&self, vertex: &Vertex) -> Option<usize> {
        self.vertex_cache.get(vertex).copied()
    }

    // =========================================================================
    // INSERTION
    // =========================================================================

    /// Inserts a vertex and returns its index.
    ///
    /// Inserting a vertex that already exists returns the existing index
    /// and emits a duplicate-vertex warning; the builder is left unchanged.
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        if let Some(&index) = self.vertex_cache.get(&vertex) {
            warn!(index, "Duplicate vertex found at index {index}");
            return index;
        }
        self.push_vertex(vertex)
    }

    /// Adds a polygon given its corners in winding order.
    ///
    /// Corners are deduplicated against existing vertices without any
    /// duplicate warning. Fails with [`MeshError::TooFewVertices`] for
    /// fewer than three corners and [`MeshError::DuplicateIndex`] when the
    /// same corner appears twice. On failure nothing is inserted.
    pub fn add_face(&mut self, corners: &[Vertex]) -> MeshResult<()> {
        let (indices, pending) = self.plan_face(corners);
        let face = Face::new(indices)?;

        for vertex in pending {
            self.intern_vertex(vertex);
        }
        self.faces.push(face);
        Ok(())
    }

    /// Resolves corner indices without mutating, returning the indices and
    /// the new vertices that would be appended, in append order.
    fn plan_face(&self, corners: &[Vertex]) -> (Vec<usize>, Vec<Vertex>) {
        let mut indices = Vec::with_capacity(corners.len());
        let mut pending = Vec::new();
        let mut provisional: HashMap<Vertex, usize> = HashMap::new();

        for corner in corners {
            let index = match self.vertex_cache.get(corner) {
                Some(&index) => index,
                None => *provisional.entry(*corner).or_insert_with(|| {
                    pending.push(*corner);
                    self.vertices.len() + pending.len() - 1
                }),
            };
            indices.push(index);
        }

        (indices, pending)
    }

    /// Quiet insertion used by the bulk path.
    fn intern_vertex(&mut self, vertex: Vertex) -> usize {
        match self.vertex_cache.get(&vertex) {
            Some(&index) => index,
            None => self.push_vertex(vertex),
        }
    }

    fn push_vertex(&mut self, vertex: Vertex) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        self.vertex_cache.insert(vertex, index);
        index
    }

    // =========================================================================
    // SNAPSHOTS
    // =========================================================================

    /// Exports the builder as a plain snapshot.
    pub fn export_data(&self) -> MeshSnapshot {
        MeshSnapshot {
            vertices: self.vertices.clone(),
            faces: self.faces.iter().map(FaceRecord::from).collect(),
        }
    }

    /// Replaces the builder contents with a snapshot.
    ///
    /// Every face is validated first; a malformed snapshot fails exactly as
    /// the equivalent `add_face` call would and leaves the builder as it
    /// was. Replacing non-empty vertices or faces emits one overwrite
    /// warning per collection. The dedup cache is rebuilt so later
    /// insertions keep deduplicating against the imported vertices.
    pub fn import_data(&mut self, snapshot: &MeshSnapshot) -> MeshResult<()> {
        let faces = snapshot
            .faces
            .iter()
            .map(Face::try_from)
            .collect::<MeshResult<Vec<_>>>()?;

        let vertex_count = self.vertices.len();
        if vertex_count > 0 {
            warn!(count = vertex_count, "Overwriting {vertex_count} vertices due to import");
        }
        self.vertices = snapshot.vertices.clone();

        let face_count = self.faces.len();
        if face_count > 0 {
            warn!(count = face_count, "Overwriting {face_count} faces due to import");
        }
        self.faces = faces;

        self.rebuild_cache();
        debug!(
            vertices = self.vertices.len(),
            faces = self.faces.len(),
            "Imported mesh snapshot"
        );
        Ok(())
    }

    /// Rebuilds the dedup cache from the vertex sequence.
    ///
    /// A repeated vertex keeps mapping to its first occurrence.
    fn rebuild_cache(&mut self) {
        self.vertex_cache.clear();
        self.vertex_cache.reserve(self.vertices.len());

        for (index, vertex) in self.vertices.iter().enumerate() {
            match self.vertex_cache.entry(*vertex) {
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
                Entry::Occupied(slot) => {
                    let first = *slot.get();
                    warn!(index, first, "Imported vertex {index} duplicates vertex {first}");
                }
            }
        }
    }

    // =========================================================================
    // MATERIALIZATION
    // =========================================================================

    /// Materializes the mesh into a host structure.
    ///
    /// All vertices are created and indexed before the first face is
    /// resolved. A face index that does not resolve against the created
    /// vertices fails with [`MeshError::IndexOutOfRange`]; the host keeps
    /// whatever was created up to that point.
    pub fn dump<H: HostMesh>(&self, host: &mut H) -> MeshResult<()> {
        let handles = self
            .vertices
            .iter()
            .map(|vertex| host.create_vertex(*vertex))
            .collect::<MeshResult<Vec<_>>>()?;

        host.finalize_vertices()?;

        let mut corners = Vec::new();
        for (face_index, face) in self.faces.iter().enumerate() {
            corners.clear();
            for (position, &index) in face.vertex_indices().iter().enumerate() {
                let handle = handles.get(index).copied().ok_or(MeshError::IndexOutOfRange {
                    face: face_index,
                    index,
                    position,
                    vertex_count: handles.len(),
                })?;
                corners.push(handle);
            }
            host.create_face(&corners)?;
        }

        host.finalize_topology()?;
        debug!(
            vertices = handles.len(),
            faces = self.faces.len(),
            "Materialized mesh into host"
        );
        Ok(())
    }
}

impl TryFrom<&MeshSnapshot> for MeshBuilder {
    type Error = MeshError;

    fn try_from(snapshot: &MeshSnapshot) -> MeshResult<Self> {
        let mut builder = MeshBuilder::new();
        builder.import_data(snapshot)?;
        Ok(builder)
    }
}
