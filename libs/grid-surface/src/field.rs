//! # Scalar Fields
//!
//! Height functions sampled over the grid. Fields must be total and free of
//! side effects: the generator may evaluate them in any order and from
//! several threads.

use config::constants::{GAUSSIAN_PEAK_SCALE, GAUSSIAN_VARIANCE};
use std::f64::consts::PI;

/// A function of two real arguments returning a height.
///
/// Implemented for every `Fn(f64, f64) -> f64`.
///
/// # Example
///
/// ```rust
/// use grid_surface::ScalarField;
///
/// let saddle = |x: f64, y: f64| x * x - y * y;
/// assert_eq!(saddle.sample(2.0, 1.0), 3.0);
/// ```
pub trait ScalarField {
    /// Evaluates the field at `(x, y)`.
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> ScalarField for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// A flat field at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant(pub f64);

impl ScalarField for Constant {
    #[inline]
    fn sample(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

/// Spherical bivariate gaussian centred on the origin.
///
/// `z = scale / sqrt(2π·variance) · exp(-(x² + y²) / (2·variance))`
///
/// # Example
///
/// ```rust
/// use grid_surface::{Gaussian, ScalarField};
///
/// let bump = Gaussian::default();
/// assert_eq!(bump.sample(0.0, 0.0), bump.peak());
/// assert!(bump.sample(3.0, 0.0) < bump.peak());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    /// Variance of both axes
    pub variance: f64,
    /// Multiplier applied to the density
    pub scale: f64,
}

impl Gaussian {
    /// Creates a gaussian with the given variance and scale.
    pub fn new(variance: f64, scale: f64) -> Self {
        Self { variance, scale }
    }

    /// Height at the origin.
    pub fn peak(&self) -> f64 {
        self.scale / (2.0 * PI * self.variance).sqrt()
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self::new(GAUSSIAN_VARIANCE, GAUSSIAN_PEAK_SCALE)
    }
}

impl ScalarField for Gaussian {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let distance = x * x + y * y;
        self.peak() * (-distance / (2.0 * self.variance)).exp()
    }
}
