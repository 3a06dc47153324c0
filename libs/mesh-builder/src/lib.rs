//! # Mesh Builder
//!
//! Engine-agnostic intermediate mesh representation: deduplicated vertices,
//! validated polygon faces and a portable snapshot format.
//!
//! ## Architecture
//!
//! ```text
//! add_face / add_vertex → MeshBuilder → export_data → MeshSnapshot (JSON)
//!                                     ↘ dump → HostMesh (native geometry)
//! ```
//!
//! ## Advisories
//!
//! Non-fatal conditions are reported with `tracing::warn!` and never abort
//! the caller:
//! - inserting an existing vertex through [`MeshBuilder::add_vertex`]
//! - importing over a builder that already holds vertices or faces
//!
//! ## Usage
//!
//! ```rust
//! use mesh_builder::{MeshBuilder, MeshSnapshot, PolygonMesh, Vertex};
//!
//! let mut builder = MeshBuilder::new();
//! builder.add_face(&[
//!     Vertex::new(0.0, 0.0, 1.0),
//!     Vertex::new(0.0, 1.0, 1.0),
//!     Vertex::new(1.0, 1.0, 1.0),
//!     Vertex::new(1.0, 0.0, 1.0),
//! ])?;
//!
//! let json = builder.export_data().to_json()?;
//!
//! let mut reloaded = MeshBuilder::new();
//! reloaded.import_data(&MeshSnapshot::from_json(&json)?)?;
//!
//! let mut host = PolygonMesh::new();
//! reloaded.dump(&mut host)?;
//! assert_eq!(host.face_count(), 1);
//! # Ok::<(), mesh_builder::MeshError>(())
//! ```

pub mod builder;
pub mod error;
pub mod face;
pub mod host;
pub mod snapshot;
pub mod vertex;

pub use builder::MeshBuilder;
pub use error::{MeshError, MeshResult};
pub use face::{Face, FaceRecord};
pub use host::{HostMesh, MeshBuffers, PolygonMesh};
pub use snapshot::MeshSnapshot;
pub use vertex::Vertex;
