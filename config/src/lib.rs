//! # Config Crate
//!
//! Centralized configuration constants for the mesh builder workspace.
//! Face validity limits, grid sampling defaults, the default surface
//! function parameters and snapshot I/O limits are defined here so the
//! builder and the generator agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GridConfig, MIN_FACE_VERTICES, QUAD_CORNERS};
//!
//! // A quad always satisfies the face size invariant
//! assert!(QUAD_CORNERS >= MIN_FACE_VERTICES);
//!
//! // Default grid reproduces the reference surface sampling
//! let grid = GridConfig::default();
//! assert_eq!(grid.samples, 50);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and plain validated structs
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
