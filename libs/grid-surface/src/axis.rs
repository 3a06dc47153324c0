//! # Grid Axis
//!
//! Validated, strictly increasing breakpoints along one grid direction.

use crate::error::{GridError, GridResult};
use config::constants::GridConfig;

/// Breakpoints of one grid direction.
///
/// Breakpoints are finite and strictly increasing. An axis with fewer than
/// two breakpoints is valid and has no cells.
///
/// # Example
///
/// ```rust
/// use grid_surface::GridAxis;
///
/// let axis = GridAxis::new(vec![0.0, 1.0, 2.0]).unwrap();
/// let cells: Vec<_> = axis.cells().collect();
/// assert_eq!(cells, vec![(0.0, 1.0), (1.0, 2.0)]);
///
/// assert!(GridAxis::new(vec![0.0, 0.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridAxis {
    breakpoints: Vec<f64>,
}

impl GridAxis {
    /// Creates an axis from breakpoints.
    pub fn new(breakpoints: Vec<f64>) -> GridResult<Self> {
        for (position, &value) in breakpoints.iter().enumerate() {
            if !value.is_finite() {
                return Err(GridError::NonFiniteBreakpoint { position, value });
            }
            if position > 0 {
                let previous = breakpoints[position - 1];
                if value <= previous {
                    return Err(GridError::NotIncreasing {
                        position,
                        previous,
                        value,
                    });
                }
            }
        }
        Ok(Self { breakpoints })
    }

    /// Creates an evenly spaced axis.
    pub fn from_step(start: f64, step: f64, samples: usize) -> GridResult<Self> {
        Self::from_config(&GridConfig::new(start, step, samples)?)
    }

    /// Creates an axis from a grid configuration.
    pub fn from_config(config: &GridConfig) -> GridResult<Self> {
        Self::new(config.breakpoints())
    }

    /// Returns the breakpoints.
    #[inline]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    /// Returns the number of breakpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    /// Returns true if the axis has no breakpoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Returns the number of cells between breakpoints.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.breakpoints.len().saturating_sub(1)
    }

    /// Iterates adjacent breakpoint pairs.
    pub fn cells(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.breakpoints.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl TryFrom<Vec<f64>> for GridAxis {
    type Error = GridError;

    fn try_from(breakpoints: Vec<f64>) -> GridResult<Self> {
        Self::new(breakpoints)
    }
}

impl TryFrom<&[f64]> for GridAxis {
    type Error = GridError;

    fn try_from(breakpoints: &[f64]) -> GridResult<Self> {
        Self::new(breakpoints.to_vec())
    }
}
