//! # Vertex
//!
//! Immutable 3D position used as the deduplication key of the builder.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A point in 3D space identified by exact coordinate equality.
///
/// Equality and hashing work on canonical bit patterns: `-0.0` is treated
/// as `0.0` and every NaN as the same NaN, so `Eq` holds as an equivalence
/// relation and agrees with `Hash`.
///
/// # Example
///
/// ```rust
/// use mesh_builder::Vertex;
///
/// let a = Vertex::new(1.0, 2.0, 3.0);
/// let b = Vertex::from([1.0, 2.0, 3.0]);
/// assert_eq!(a, b);
/// assert_eq!(Vertex::new(0.0, 0.0, 0.0), Vertex::new(-0.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Creates a vertex from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the coordinates as an array.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the position as a glam vector.
    #[inline]
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    fn key(&self) -> [u64; 3] {
        [canonical_bits(self.x), canonical_bits(self.y), canonical_bits(self.z)]
    }
}

#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<DVec3> for Vertex {
    fn from(position: DVec3) -> Self {
        Self::new(position.x, position.y, position.z)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vertex> for DVec3 {
    fn from(vertex: Vertex) -> Self {
        vertex.to_dvec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Vertex::new(1.0, 2.0, 3.0), Vertex::new(1.0, 2.0, 3.0));
        assert_ne!(Vertex::new(1.0, 2.0, 3.0), Vertex::new(1.0, 2.0, 3.5));
    }

    #[test]
    fn test_signed_zero_collapses() {
        let mut set = HashSet::new();
        set.insert(Vertex::new(0.0, -0.0, 1.0));
        set.insert(Vertex::new(-0.0, 0.0, 1.0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_nan_is_reflexive() {
        let v = Vertex::new(f64::NAN, 0.0, 0.0);
        assert_eq!(v, v);
        let mut set = HashSet::new();
        set.insert(v);
        set.insert(Vertex::new(-f64::NAN, 0.0, 0.0));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_glam_conversion() {
        let v = Vertex::from(DVec3::new(1.0, -2.0, 0.5));
        assert_eq!(v.to_array(), [1.0, -2.0, 0.5]);
        assert_eq!(DVec3::from(v), DVec3::new(1.0, -2.0, 0.5));
    }

    #[test]
    fn test_serializes_as_xyz_record() {
        let json = serde_json::to_string(&Vertex::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
    }
}
