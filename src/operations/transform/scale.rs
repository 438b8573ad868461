use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::mesh::Polyhedron;

/// Scales a polyhedron uniformly from a center point.
///
/// A negative factor mirrors through the center and flips the sign of the
/// polyhedron's signed volume.
pub struct Scale {
    center: Point3,
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(center: Point3, factor: f64) -> Self {
        Self { center, factor }
    }

    /// Executes the scaling, modifying the polyhedron in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the factor or the center is not finite.
    pub fn execute(&self, polyhedron: &mut Polyhedron) -> Result<()> {
        if !self.factor.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "scale factor {} is not finite",
                self.factor
            ))
            .into());
        }
        if !self.center.coords.iter().all(|c| c.is_finite()) {
            return Err(OperationError::InvalidInput(format!(
                "scale center {:?} is not finite",
                self.center
            ))
            .into());
        }

        for vertex in &mut polyhedron.vertices {
            *vertex = self.center + (*vertex - self.center) * self.factor;
        }
        Ok(())
    }
}
