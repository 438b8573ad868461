use crate::error::MeshError;
use crate::math::Point3;

/// A triangular face as three indices into a vertex array.
///
/// Wound counter-clockwise when viewed from outside the solid.
pub type Face = [u32; 3];

/// A closed triangulated surface: vertex positions plus face index triples.
///
/// Indices are not checked on construction. Volume queries reject faces that
/// reference missing vertices; orientation and closedness are never checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyhedron {
    /// Vertex positions. Vertex 0 is the reference apex for volume queries.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a face).
    pub faces: Vec<Face>,
}

impl Polyhedron {
    /// Creates a polyhedron from vertex positions and face triples.
    #[must_use]
    pub fn new(vertices: Vec<Point3>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    /// Creates a polyhedron from flat buffers.
    ///
    /// `coords` holds `x, y, z` for each vertex in order; `indices` holds three
    /// vertex indices per face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::MalformedBuffer`] if either buffer length is not a
    /// multiple of 3.
    pub fn from_flat(coords: &[f64], indices: &[u32]) -> Result<Self, MeshError> {
        if coords.len() % 3 != 0 {
            return Err(MeshError::MalformedBuffer {
                what: "coordinate",
                len: coords.len(),
            });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::MalformedBuffer {
                what: "index",
                len: indices.len(),
            });
        }

        let vertices = coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        let faces = indices
            .chunks_exact(3)
            .map(|f| [f[0], f[1], f[2]])
            .collect();

        Ok(Self { vertices, faces })
    }

    /// Reverses the winding of every face, turning the surface inside out.
    pub fn flip_faces(&mut self) {
        for face in &mut self.faces {
            face.swap(1, 2);
        }
    }
}
