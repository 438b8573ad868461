use crate::math::Point3;
use crate::mesh::{Face, Polyhedron};

/// Face table for a quadrilaterally-faced hexahedron.
///
/// Corner order: 0..3 walk the bottom quad (0 back-left, 1 front-left,
/// 2 front-right, 3 back-right), 4..7 sit directly above 0..3.
///
/// ```text
///       4  .__________. 7
///         /|      6  /|
///    5  ./_|_______./ |
///       |  |       |  |
///       |  |0      |  |
///       |  |_______|__|3
///       | /        | /
///    1  |/_________|/ 2
/// ```
///
/// Each quad is split into two triangles wound outward.
pub const HEXAHEDRON_FACES: [Face; 12] = [
    // bottom
    [0, 2, 1],
    [0, 3, 2],
    // top
    [4, 5, 6],
    [4, 6, 7],
    // left
    [0, 5, 4],
    [0, 1, 5],
    // front
    [1, 6, 5],
    [1, 2, 6],
    // right
    [3, 6, 2],
    [3, 7, 6],
    // back
    [0, 7, 3],
    [0, 4, 7],
];

/// Creates a hexahedron from its eight corners in [`HEXAHEDRON_FACES`] order.
///
/// The quads need not be rectangles; skewed and slanted hexahedra are fine as
/// long as every face is planar.
pub struct MakeHexahedron {
    corners: [Point3; 8],
}

impl MakeHexahedron {
    /// Creates a new `MakeHexahedron` operation.
    #[must_use]
    pub fn new(corners: [Point3; 8]) -> Self {
        Self { corners }
    }

    /// Executes the operation, returning the triangulated polyhedron.
    #[must_use]
    pub fn execute(&self) -> Polyhedron {
        Polyhedron::new(self.corners.to_vec(), HEXAHEDRON_FACES.to_vec())
    }
}
