//! # Grid Surface
//!
//! Samples a scalar field over a rectangular grid and feeds one quad per
//! grid cell into a [`MeshBuilder`](mesh_builder::MeshBuilder).
//!
//! ## Architecture
//!
//! ```text
//! GridAxis × GridAxis + ScalarField → HeightGrid → add_face per cell → MeshBuilder
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use grid_surface::{generate_surface, Gaussian, GridAxis};
//! use mesh_builder::PolygonMesh;
//!
//! let axis = GridAxis::from_step(-2.0, 0.5, 9)?;
//! let builder = generate_surface(&Gaussian::default(), &axis, &axis)?;
//! assert_eq!(builder.face_count(), 64);
//!
//! let mut host = PolygonMesh::new();
//! builder.dump(&mut host)?;
//! # Ok::<(), grid_surface::GridError>(())
//! ```

pub mod axis;
pub mod error;
pub mod field;
pub mod generate;
pub mod sampling;

pub use axis::GridAxis;
pub use error::{GridError, GridResult};
pub use field::{Constant, Gaussian, ScalarField};
pub use generate::{
    gaussian_snapshot, generate_mesh, generate_surface, generate_surface_par, populate,
};
pub use sampling::HeightGrid;
