use crate::error::{OperationError, Result};
use crate::math::Vector3;
use crate::mesh::Polyhedron;

/// Translates a polyhedron by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, modifying the polyhedron in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the displacement has a non-finite component.
    pub fn execute(&self, polyhedron: &mut Polyhedron) -> Result<()> {
        if !self.displacement.iter().all(|c| c.is_finite()) {
            return Err(OperationError::InvalidInput(format!(
                "displacement {:?} is not finite",
                self.displacement
            ))
            .into());
        }

        for vertex in &mut polyhedron.vertices {
            *vertex += self.displacement;
        }
        Ok(())
    }
}
