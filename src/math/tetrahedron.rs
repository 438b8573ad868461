use super::Point3;

/// A tetrahedron given by three face vertices and a reference vertex.
///
/// The first three points form the oriented base triangle; the fourth is the
/// reference vertex the signed volume is measured from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetrahedron {
    points: [Point3; 4],
}

impl Tetrahedron {
    /// Creates a tetrahedron from its base triangle `(a, b, c)` and reference vertex `d`.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3, d: Point3) -> Self {
        Self {
            points: [a, b, c, d],
        }
    }

    /// Returns the four points in construction order.
    #[must_use]
    pub fn points(&self) -> &[Point3; 4] {
        &self.points
    }

    /// Computes the signed volume of this tetrahedron.
    ///
    /// Positive when `d` lies behind the triangle `(a, b, c)`, opposite its
    /// right-hand normal.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let [a, b, c, d] = self.points;
        signed_volume(&a, &b, &c, &d)
    }

    /// Computes the (unsigned) volume of this tetrahedron.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }
}

/// Signed volume of the tetrahedron `(p0, p1, p2, p3)`.
///
/// Translates `p3` to the origin and returns the scalar triple product of the
/// three edge vectors divided by 6. Swapping any two points flips the sign.
#[must_use]
pub fn signed_volume(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> f64 {
    let a = p0 - p3;
    let b = p1 - p3;
    let c = p2 - p3;
    a.dot(&b.cross(&c)) / 6.0
}
