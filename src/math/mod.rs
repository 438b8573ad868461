pub mod tetrahedron;

pub use tetrahedron::{signed_volume, Tetrahedron};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Absolute tolerance used when comparing a computed volume to a known value.
pub const VOLUME_TOLERANCE: f64 = 1e-4;
