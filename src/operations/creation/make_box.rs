use crate::math::Point3;
use crate::mesh::Polyhedron;

use super::MakeHexahedron;

/// Creates an axis-aligned box from two corner points.
///
/// Corners are laid out in [`HEXAHEDRON_FACES`](super::HEXAHEDRON_FACES)
/// order with `min_corner` as vertex 0. The x axis runs from back to front,
/// y from left to right, z from bottom to top.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
        }
    }

    /// Executes the operation, returning the triangulated box.
    ///
    /// The result is only positively oriented when `min_corner` is
    /// component-wise below `max_corner`.
    #[must_use]
    pub fn execute(&self) -> Polyhedron {
        let (lo, hi) = (self.min_corner, self.max_corner);
        MakeHexahedron::new([
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ])
        .execute()
    }
}
