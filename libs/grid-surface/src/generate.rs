//! # Surface Generation
//!
//! Turns a sampled height grid into one quad per cell.
//!
//! ## Cell Order
//!
//! Cells are visited x-major: for every adjacent x pair `(x1, x2)`, every
//! adjacent y pair `(y1, y2)`. Each quad lists its corners as
//!
//! ```text
//! (x1, y1) → (x1, y2) → (x2, y2) → (x2, y1)
//! ```
//!
//! so all quads share the same winding.

use crate::axis::GridAxis;
use crate::error::GridResult;
use crate::field::{Gaussian, ScalarField};
use crate::sampling::HeightGrid;
use config::constants::GridConfig;
use mesh_builder::{MeshBuilder, MeshSnapshot};
use tracing::debug;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Adds one quad per grid cell to an existing builder.
///
/// # Example
///
/// ```rust
/// use grid_surface::{populate, Constant, GridAxis};
/// use mesh_builder::MeshBuilder;
///
/// let xs = GridAxis::new(vec![0.0, 1.0, 2.0]).unwrap();
/// let ys = GridAxis::new(vec![0.0, 1.0]).unwrap();
///
/// let mut builder = MeshBuilder::new();
/// populate(&mut builder, &Constant(5.0), &xs, &ys).unwrap();
/// assert_eq!(builder.face_count(), 2);
/// assert_eq!(builder.vertex_count(), 6);
/// ```
pub fn populate<F>(
    builder: &mut MeshBuilder,
    field: &F,
    xs: &GridAxis,
    ys: &GridAxis,
) -> GridResult<()>
where
    F: ScalarField + ?Sized,
{
    let grid = HeightGrid::sample(field, xs, ys)?;
    emit_quads(builder, &grid)
}

/// Generates a surface into a fresh builder.
pub fn generate_surface<F>(field: &F, xs: &GridAxis, ys: &GridAxis) -> GridResult<MeshBuilder>
where
    F: ScalarField + ?Sized,
{
    let grid = HeightGrid::sample(field, xs, ys)?;
    let mut builder = builder_for(xs, ys);
    emit_quads(&mut builder, &grid)?;
    Ok(builder)
}

/// Generates a surface, evaluating the field in parallel.
///
/// Only sampling runs on the rayon pool; faces are fed into the single
/// builder sequentially, so the result is identical to
/// [`generate_surface`].
pub fn generate_surface_par<F>(
    field: &F,
    xs: &GridAxis,
    ys: &GridAxis,
) -> GridResult<MeshBuilder>
where
    F: ScalarField + Sync + ?Sized,
{
    let grid = HeightGrid::sample_par(field, xs, ys)?;
    let mut builder = builder_for(xs, ys);
    emit_quads(&mut builder, &grid)?;
    Ok(builder)
}

/// Generates a surface and returns its snapshot.
///
/// # Example
///
/// ```rust
/// use grid_surface::{generate_mesh, GridAxis};
///
/// let axis = GridAxis::from_step(0.0, 1.0, 4).unwrap();
/// let snapshot = generate_mesh(&|x: f64, y: f64| x * y, &axis, &axis).unwrap();
/// assert_eq!(snapshot.face_count(), 9);
/// assert_eq!(snapshot.vertex_count(), 16);
/// ```
pub fn generate_mesh<F>(field: &F, xs: &GridAxis, ys: &GridAxis) -> GridResult<MeshSnapshot>
where
    F: ScalarField + ?Sized,
{
    Ok(generate_surface(field, xs, ys)?.export_data())
}

/// Snapshot of the default gaussian bump sampled on a square grid.
pub fn gaussian_snapshot(config: &GridConfig) -> GridResult<MeshSnapshot> {
    let axis = GridAxis::from_config(config)?;
    Ok(generate_surface_par(&Gaussian::default(), &axis, &axis)?.export_data())
}

// =============================================================================
// QUAD EMISSION
// =============================================================================

fn builder_for(xs: &GridAxis, ys: &GridAxis) -> MeshBuilder {
    MeshBuilder::with_capacity(xs.len() * ys.len(), xs.cell_count() * ys.cell_count())
}

fn emit_quads(builder: &mut MeshBuilder, grid: &HeightGrid<'_>) -> GridResult<()> {
    let (columns, rows) = (grid.xs().cell_count(), grid.ys().cell_count());

    for i in 0..columns {
        for j in 0..rows {
            builder.add_face(&[
                grid.corner(i, j),
                grid.corner(i, j + 1),
                grid.corner(i + 1, j + 1),
                grid.corner(i + 1, j),
            ])?;
        }
    }

    debug!(
        cells = columns * rows,
        vertices = builder.vertex_count(),
        faces = builder.face_count(),
        "Generated grid surface"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Constant;
    use config::constants::QUAD_CORNERS;
    use mesh_builder::Vertex;

    fn axis(values: &[f64]) -> GridAxis {
        GridAxis::try_from(values).unwrap()
    }

    #[test]
    fn test_constant_strip() {
        let xs = axis(&[0.0, 1.0, 2.0]);
        let ys = axis(&[0.0, 1.0]);
        let builder = generate_surface(&Constant(5.0), &xs, &ys).unwrap();

        assert_eq!(builder.face_count(), 2);
        assert_eq!(builder.vertex_count(), 6);
        assert_eq!(builder.faces()[0].vertex_indices(), &[0, 1, 2, 3]);
        assert_eq!(builder.faces()[1].vertex_indices(), &[3, 2, 4, 5]);
        assert!(builder.vertices().iter().all(|v| v.z == 5.0));

        let snapshot = builder.export_data();
        assert_eq!(snapshot.vertices.len(), 6);
        assert_eq!(snapshot.faces.len(), 2);
    }

    #[test]
    fn test_corner_winding() {
        let field = |x: f64, y: f64| x + 10.0 * y;
        let builder = generate_surface(&field, &axis(&[1.0, 2.0]), &axis(&[3.0, 4.0])).unwrap();
        assert_eq!(
            builder.vertices(),
            &[
                Vertex::new(1.0, 3.0, 31.0),
                Vertex::new(1.0, 4.0, 41.0),
                Vertex::new(2.0, 4.0, 42.0),
                Vertex::new(2.0, 3.0, 32.0),
            ]
        );
    }

    #[test]
    fn test_face_count_is_cell_product() {
        for (m, n) in [(2, 2), (3, 5), (6, 2), (1, 4), (0, 3)] {
            let xs = GridAxis::new((0..m).map(f64::from).collect()).unwrap();
            let ys = GridAxis::new((0..n).map(f64::from).collect()).unwrap();
            let builder = generate_surface(&Constant(0.0), &xs, &ys).unwrap();

            let expected = (m as usize).saturating_sub(1) * (n as usize).saturating_sub(1);
            assert_eq!(builder.face_count(), expected, "grid {m}x{n}");
            assert!(builder
                .faces()
                .iter()
                .all(|f| f.vertex_count() == QUAD_CORNERS));
        }
    }

    #[test]
    fn test_single_breakpoint_axis_yields_empty_surface() {
        let field = |_: f64, _: f64| f64::NAN;
        let builder = generate_surface(&field, &axis(&[0.0]), &axis(&[0.0, 1.0])).unwrap();
        assert_eq!(builder.face_count(), 0);
        assert_eq!(builder.vertex_count(), 0);
    }

    #[test]
    fn test_populate_extends_existing_builder() {
        let mut builder = MeshBuilder::new();
        let xs = axis(&[0.0, 1.0]);
        populate(&mut builder, &Constant(0.0), &xs, &xs).unwrap();
        populate(&mut builder, &Constant(1.0), &xs, &xs).unwrap();

        assert_eq!(builder.face_count(), 2);
        assert_eq!(builder.vertex_count(), 8);
    }

    #[test]
    fn test_parallel_output_is_identical() {
        let xs = GridAxis::from_step(-1.0, 0.1, 21).unwrap();
        let ys = GridAxis::from_step(-0.5, 0.25, 5).unwrap();
        let field = |x: f64, y: f64| (x * 3.0).sin() * y.cos();

        let sequential = generate_surface(&field, &xs, &ys).unwrap();
        let parallel = generate_surface_par(&field, &xs, &ys).unwrap();
        assert_eq!(sequential.export_data(), parallel.export_data());
    }

    #[test]
    fn test_gaussian_snapshot_default_grid() {
        let config = GridConfig::default();
        let snapshot = gaussian_snapshot(&config).unwrap();

        assert_eq!(snapshot.vertex_count(), config.samples * config.samples);
        assert_eq!(snapshot.face_count(), config.cells() * config.cells());
    }
}
