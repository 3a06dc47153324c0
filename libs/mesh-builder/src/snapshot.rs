//! # Mesh Snapshot
//!
//! Plain, order-preserving form of a builder's state and its JSON codec.
//!
//! ## Wire Format
//!
//! ```text
//! {
//!   "vertices": [{"x": 0.0, "y": 0.0, "z": 5.0}, ...],
//!   "faces": [{"vertex_indices": [0, 1, 2, 3]}, ...]
//! }
//! ```
//!
//! Field names and nesting are the compatibility contract. A snapshot is
//! not validated on decode; [`MeshBuilder::import_data`] does that.
//!
//! [`MeshBuilder::import_data`]: crate::MeshBuilder::import_data

use crate::error::{MeshError, MeshResult};
use crate::face::FaceRecord;
use crate::vertex::Vertex;
use config::constants::MAX_SNAPSHOT_FILE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Serializable snapshot of vertices and faces.
///
/// # Example
///
/// ```rust
/// use mesh_builder::MeshSnapshot;
///
/// let json = r#"{"vertices":[],"faces":[]}"#;
/// let snapshot = MeshSnapshot::from_json(json).unwrap();
/// assert!(snapshot.is_empty());
/// assert_eq!(snapshot.to_json().unwrap(), json);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshSnapshot {
    /// Vertices in index order.
    pub vertices: Vec<Vertex>,
    /// Faces in insertion order.
    pub faces: Vec<FaceRecord>,
}

impl MeshSnapshot {
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

    /// Returns true if the snapshot holds neither vertices nor faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Encodes the snapshot as compact JSON.
    pub fn to_json(&self) -> MeshResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes the snapshot as indented JSON.
    pub fn to_json_pretty(&self) -> MeshResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes a snapshot from JSON.
    pub fn from_json(json: &str) -> MeshResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the snapshot as compact JSON to a writer.
    pub fn write_to<W: Write>(&self, writer: W) -> MeshResult<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Reads a snapshot from a JSON reader.
    pub fn read_from<R: Read>(reader: R) -> MeshResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Saves the snapshot to a JSON file, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> MeshResult<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;

        debug!(
            path = %path.display(),
            vertices = self.vertex_count(),
            faces = self.face_count(),
            "Saved mesh snapshot"
        );
        Ok(())
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// Files larger than [`MAX_SNAPSHOT_FILE_SIZE`] are rejected before
    /// any parsing happens.
    pub fn load(path: impl AsRef<Path>) -> MeshResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let size = file.metadata()?.len();
        if size > MAX_SNAPSHOT_FILE_SIZE {
            return Err(MeshError::SnapshotTooLarge {
                size,
                max: MAX_SNAPSHOT_FILE_SIZE,
            });
        }

        let snapshot = Self::read_from(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            vertices = snapshot.vertex_count(),
            faces = snapshot.face_count(),
            "Loaded mesh snapshot"
        );
        Ok(snapshot)
    }
}
