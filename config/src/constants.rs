//! # Configuration Constants
//!
//! Centralized constants for mesh building and grid surface generation.
//!
//! ## Categories
//!
//! - **Topology**: Face size limits
//! - **Surface**: Default scalar field parameters
//! - **Grid**: Default sampling of the surface domain
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// TOPOLOGY CONSTANTS
// =============================================================================

/// Minimum number of vertices a face must reference.
///
/// A polygon needs at least three distinct corners to enclose an area.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_FACE_VERTICES;
///
/// let corners = [0usize, 1, 2];
/// assert!(corners.len() >= MIN_FACE_VERTICES);
/// ```
pub const MIN_FACE_VERTICES: usize = 3;

/// Number of corners submitted per grid cell.
///
/// Every cell of a sampled grid becomes one quad.
pub const QUAD_CORNERS: usize = 4;

// =============================================================================
// SURFACE CONSTANTS
// =============================================================================

/// Variance of the default spherical gaussian surface.
///
/// # Example
///
/// ```rust
/// use config::constants::GAUSSIAN_VARIANCE;
///
/// let spread = GAUSSIAN_VARIANCE.sqrt();
/// assert_eq!(spread, 1.0);
/// ```
pub const GAUSSIAN_VARIANCE: f64 = 1.0;

/// Scale factor applied to the default gaussian so its peak is visible
/// at grid resolution.
pub const GAUSSIAN_PEAK_SCALE: f64 = 10.0;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// First breakpoint of the default grid axis.
pub const DEFAULT_GRID_START: f64 = -5.0;

/// Spacing between consecutive breakpoints of the default grid axis.
pub const DEFAULT_GRID_STEP: f64 = 0.2;

/// Number of breakpoints on each default grid axis.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_GRID_SAMPLES, DEFAULT_GRID_START, DEFAULT_GRID_STEP};
///
/// // Last breakpoint stops one step short of +5.0
/// let last = DEFAULT_GRID_START + DEFAULT_GRID_STEP * (DEFAULT_GRID_SAMPLES - 1) as f64;
/// assert!((last - 4.8).abs() < 1e-9);
/// ```
pub const DEFAULT_GRID_SAMPLES: usize = 50;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum size of a snapshot file accepted by the loader (in bytes).
///
/// Prevents loading extremely large files that could cause memory issues.
/// 100 MB default.
pub const MAX_SNAPSHOT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Default file name used when a snapshot is written next to a scene.
pub const SNAPSHOT_FILE_NAME: &str = "mesh.json";

// =============================================================================
// GRID CONFIGURATION
// =============================================================================

/// Evenly spaced sampling of one grid axis.
///
/// # Examples
/// ```
/// use config::constants::GridConfig;
/// let config = GridConfig::default();
/// assert!(config.step > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// First breakpoint.
    pub start: f64,
    /// Spacing between consecutive breakpoints.
    pub step: f64,
    /// Number of breakpoints.
    pub samples: usize,
}

impl GridConfig {
    /// Builds a grid configuration, rejecting values that cannot produce a
    /// strictly increasing axis with at least one cell.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GridConfig;
    /// let cfg = GridConfig::new(0.0, 0.5, 5).expect("valid config");
    /// assert_eq!(cfg.breakpoints(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    /// ```
    pub fn new(start: f64, step: f64, samples: usize) -> Result<Self, ConfigError> {
        if !start.is_finite() {
            return Err(ConfigError::InvalidStart(start));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        if samples < 2 {
            return Err(ConfigError::InvalidSamples(samples));
        }
        Ok(Self {
            start,
            step,
            samples,
        })
    }

    /// Expands the configuration into its breakpoints.
    ///
    /// When the step is `1 / n` for an integer `n` and the start lies on
    /// that lattice, breakpoint `i` is `(start * n + i) / n`. This keeps
    /// values such as `-2.2` exact instead of accumulating `step` error.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GridConfig;
    /// let points = GridConfig::default().breakpoints();
    /// assert_eq!(points[14], -2.2);
    /// assert_eq!(points[49], 4.8);
    /// ```
    pub fn breakpoints(&self) -> Vec<f64> {
        match self.lattice() {
            Some((first, subdivisions)) => (0..self.samples)
                .map(|i| (first + i as f64) / subdivisions)
                .collect(),
            None => (0..self.samples)
                .map(|i| self.start + self.step * i as f64)
                .collect(),
        }
    }

    /// Integer lattice `(start * n, n)` for a step of exactly `1 / n`.
    fn lattice(&self) -> Option<(f64, f64)> {
        let subdivisions = (1.0 / self.step).round();
        if subdivisions < 1.0 || 1.0 / subdivisions != self.step {
            return None;
        }
        let first = (self.start * subdivisions).round();
        (first / subdivisions == self.start).then_some((first, subdivisions))
    }

    /// Number of cells between the breakpoints.
    #[inline]
    pub fn cells(&self) -> usize {
        self.samples.saturating_sub(1)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_GRID_START,
            step: DEFAULT_GRID_STEP,
            samples: DEFAULT_GRID_SAMPLES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the first breakpoint is NaN or infinite.
    InvalidStart(f64),
    /// Raised when the step is zero, negative or not finite.
    InvalidStep(f64),
    /// Raised when fewer than two samples are requested.
    InvalidSamples(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStart(value) => {
                write!(f, "start must be finite: {value}")
            }
            ConfigError::InvalidStep(value) => {
                write!(f, "step must be finite and positive: {value}")
            }
            ConfigError::InvalidSamples(value) => {
                write!(f, "samples must be >= 2: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
