use crate::math::Point3;
use crate::mesh::{Face, Polyhedron};

/// Face table for a triangular prism.
///
/// Corner order: 0..2 the bottom triangle, counter-clockwise seen from above;
/// 3..5 the top triangle with vertex `i + 3` above vertex `i`. Top and bottom
/// need not be parallel.
///
/// ```text
///        3 .
///         /|\
///     4 ./_|_\. 5
///       |  |  |
///       |  |0 |
///       |  |  |
///       | / \ |
///    1  |/___\| 2
/// ```
pub const PRISM_FACES: [Face; 8] = [
    // bottom
    [0, 2, 1],
    // top
    [3, 4, 5],
    // side 0-1
    [0, 4, 3],
    [0, 1, 4],
    // side 1-2
    [1, 5, 4],
    [1, 2, 5],
    // side 2-0
    [0, 3, 5],
    [0, 5, 2],
];

/// Creates a triangular prism from its six corners in [`PRISM_FACES`] order.
pub struct MakePrism {
    corners: [Point3; 6],
}

impl MakePrism {
    /// Creates a new `MakePrism` operation.
    #[must_use]
    pub fn new(corners: [Point3; 6]) -> Self {
        Self { corners }
    }

    /// Executes the operation, returning the triangulated polyhedron.
    #[must_use]
    pub fn execute(&self) -> Polyhedron {
        Polyhedron::new(self.corners.to_vec(), PRISM_FACES.to_vec())
    }
}
