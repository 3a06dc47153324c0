//! # Height Sampling
//!
//! Evaluates a scalar field once per grid breakpoint pair.

use crate::axis::GridAxis;
use crate::error::{GridError, GridResult};
use crate::field::ScalarField;
use mesh_builder::Vertex;
use rayon::prelude::*;

/// Field heights at every breakpoint pair, stored x-major.
///
/// Empty when either axis has no cells.
#[derive(Debug, Clone)]
pub struct HeightGrid<'a> {
    xs: &'a GridAxis,
    ys: &'a GridAxis,
    heights: Vec<f64>,
}

impl<'a> HeightGrid<'a> {
    /// Samples the field sequentially.
    ///
    /// Nothing is sampled when either axis has no cells.
    pub fn sample<F>(field: &F, xs: &'a GridAxis, ys: &'a GridAxis) -> GridResult<Self>
    where
        F: ScalarField + ?Sized,
    {
        if !has_cells(xs, ys) {
            return Ok(Self::empty(xs, ys));
        }

        let heights = xs
            .breakpoints()
            .iter()
            .flat_map(|&x| ys.breakpoints().iter().map(move |&y| field.sample(x, y)))
            .collect();

        Self::checked(xs, ys, heights)
    }

    /// Samples the field on the rayon thread pool.
    ///
    /// Produces exactly the same grid as [`HeightGrid::sample`].
    pub fn sample_par<F>(field: &F, xs: &'a GridAxis, ys: &'a GridAxis) -> GridResult<Self>
    where
        F: ScalarField + Sync + ?Sized,
    {
        if !has_cells(xs, ys) {
            return Ok(Self::empty(xs, ys));
        }

        let (xb, yb) = (xs.breakpoints(), ys.breakpoints());
        let columns = yb.len();

        let heights = (0..xb.len() * columns)
            .into_par_iter()
            .map(|k| field.sample(xb[k / columns], yb[k % columns]))
            .collect();

        Self::checked(xs, ys, heights)
    }

    fn empty(xs: &'a GridAxis, ys: &'a GridAxis) -> Self {
        Self {
            xs,
            ys,
            heights: Vec::new(),
        }
    }

    fn checked(xs: &'a GridAxis, ys: &'a GridAxis, heights: Vec<f64>) -> GridResult<Self> {
        let grid = Self { xs, ys, heights };

        let columns = ys.len();
        if let Some(k) = grid.heights.iter().position(|h| !h.is_finite()) {
            return Err(GridError::NonFiniteSample {
                x: xs.breakpoints()[k / columns],
                y: ys.breakpoints()[k % columns],
                value: grid.heights[k],
            });
        }

        Ok(grid)
    }

    /// Height at breakpoint `(i, j)`.
    #[inline]
    pub fn height(&self, i: usize, j: usize) -> f64 {
        self.heights[i * self.ys.len() + j]
    }

    /// 3D vertex at breakpoint `(i, j)`.
    #[inline]
    pub fn corner(&self, i: usize, j: usize) -> Vertex {
        Vertex::new(
            self.xs.breakpoints()[i],
            self.ys.breakpoints()[j],
            self.height(i, j),
        )
    }

    /// The x axis.
    #[inline]
    pub fn xs(&self) -> &GridAxis {
        self.xs
    }

    /// The y axis.
    #[inline]
    pub fn ys(&self) -> &GridAxis {
        self.ys
    }
}

fn has_cells(xs: &GridAxis, ys: &GridAxis) -> bool {
    xs.cell_count() > 0 && ys.cell_count() > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Constant, Gaussian};

    #[test]
    fn test_heights_are_x_major() {
        let xs = GridAxis::new(vec![0.0, 1.0, 2.0]).unwrap();
        let ys = GridAxis::new(vec![10.0, 20.0]).unwrap();
        let grid = HeightGrid::sample(&|x: f64, y: f64| x * 100.0 + y, &xs, &ys).unwrap();

        assert_eq!(grid.height(0, 1), 20.0);
        assert_eq!(grid.height(2, 0), 210.0);
        assert_eq!(grid.corner(1, 1), Vertex::new(1.0, 20.0, 120.0));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let xs = GridAxis::from_step(-2.0, 0.25, 17).unwrap();
        let ys = GridAxis::from_step(-1.0, 0.5, 5).unwrap();
        let field = Gaussian::default();

        let sequential = HeightGrid::sample(&field, &xs, &ys).unwrap();
        let parallel = HeightGrid::sample_par(&field, &xs, &ys).unwrap();
        assert_eq!(sequential.heights, parallel.heights);
    }

    #[test]
    fn test_non_finite_sample_is_reported() {
        let xs = GridAxis::new(vec![-1.0, 0.0, 1.0]).unwrap();
        let ys = GridAxis::new(vec![0.0, 2.0]).unwrap();
        let err = HeightGrid::sample(&|x: f64, y: f64| y / x, &xs, &ys).unwrap_err();

        // 0/0 at (0, 0) comes first in x-major order
        match err {
            GridError::NonFiniteSample { x, y, value } => {
                assert_eq!((x, y), (0.0, 0.0));
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_cell_less_grid_skips_the_field() {
        let xs = GridAxis::new(vec![0.0]).unwrap();
        let ys = GridAxis::new(vec![0.0, 1.0, 2.0]).unwrap();
        let field = |x: f64, y: f64| y / x;

        let grid = HeightGrid::sample(&field, &xs, &ys).unwrap();
        assert!(grid.heights.is_empty());
        let grid = HeightGrid::sample_par(&field, &ys, &xs).unwrap();
        assert!(grid.heights.is_empty());
    }

    #[test]
    fn test_empty_axis_samples_nothing() {
        let xs = GridAxis::new(Vec::new()).unwrap();
        let ys = GridAxis::new(vec![0.0, 1.0]).unwrap();
        let grid = HeightGrid::sample_par(&Constant(1.0), &xs, &ys).unwrap();
        assert!(grid.heights.is_empty());
    }
}
