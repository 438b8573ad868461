use tracing::{debug, trace, warn};

use crate::error::{MeshError, Result};
use crate::math::{Point3, Tetrahedron};
use crate::mesh::{Face, Polyhedron};

/// Computes the volume enclosed by a triangulated surface.
///
/// Uses the divergence-theorem decomposition: every face forms a tetrahedron
/// with vertex 0 of the polyhedron, and the signed volumes of those
/// tetrahedra are summed. Faces that touch vertex 0 contribute nothing.
///
/// The result equals the enclosed volume when the surface is closed and every
/// face is wound counter-clockwise as seen from outside. Inconsistent winding
/// or an open surface produce a wrong value without any error; a fully
/// inverted surface produces the negated volume.
pub struct Volume<'a> {
    vertices: &'a [Point3],
    faces: &'a [Face],
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query over borrowed vertices and faces.
    #[must_use]
    pub fn new(vertices: &'a [Point3], faces: &'a [Face]) -> Self {
        Self { vertices, faces }
    }

    /// Creates a new `Volume` query over a polyhedron.
    #[must_use]
    pub fn of(polyhedron: &'a Polyhedron) -> Self {
        Self::new(&polyhedron.vertices, &polyhedron.faces)
    }

    /// Executes the query, returning the signed volume.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOutOfRange`] for the first face that
    /// references a vertex past the end of the vertex array.
    pub fn execute(&self) -> Result<f64> {
        let Some(&apex) = self.vertices.first() else {
            if let Some(face) = self.faces.first() {
                return Err(self.out_of_range(0, face[0]).into());
            }
            return Ok(0.0);
        };

        let mut volume = 0.0;
        for (i, face) in self.faces.iter().enumerate() {
            let [a, b, c] = self.face_points(i, face)?;
            let contribution = Tetrahedron::new(a, b, c, apex).signed_volume();
            trace!(face = i, contribution, "accumulated face");
            volume += contribution;
        }

        debug!(
            vertices = self.vertices.len(),
            faces = self.faces.len(),
            volume,
            "computed polyhedron volume"
        );
        Ok(volume)
    }

    fn face_points(
        &self,
        face_idx: usize,
        face: &Face,
    ) -> std::result::Result<[Point3; 3], MeshError> {
        let mut points = [Point3::origin(); 3];
        for (slot, &index) in points.iter_mut().zip(face) {
            *slot = *self
                .vertices
                .get(index as usize)
                .ok_or_else(|| self.out_of_range(face_idx, index))?;
        }
        Ok(points)
    }

    fn out_of_range(&self, face: usize, index: u32) -> MeshError {
        warn!(face, index, len = self.vertices.len(), "face index out of range");
        MeshError::IndexOutOfRange {
            face,
            index,
            len: self.vertices.len(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PolyvolError;
    use crate::math::{Vector3, VOLUME_TOLERANCE};
    use crate::operations::creation::{MakeBox, MakeHexahedron, MakePrism};
    use crate::operations::transform::{Scale, Translate};
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn pyramid() -> Polyhedron {
        Polyhedron::new(
            vec![
                p(0.0, 0.0, 0.0),
                p(1.0, 0.0, 0.0),
                p(0.0, 1.0, 0.0),
                p(1.0, 1.0, 1.0),
            ],
            vec![[1, 0, 2], [1, 3, 0], [2, 3, 0], [1, 2, 3]],
        )
    }

    fn parallelepiped() -> [Point3; 8] {
        [
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(4.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
            p(0.0, 0.0, 2.0),
            p(4.0, 0.0, 2.0),
            p(4.0, 2.0, 2.0),
            p(0.0, 2.0, 2.0),
        ]
    }

    fn volume(poly: &Polyhedron) -> f64 {
        Volume::of(poly).execute().unwrap()
    }

    #[test]
    fn pyramid_volume() {
        assert_abs_diff_eq!(volume(&pyramid()), 1.0 / 6.0, epsilon = VOLUME_TOLERANCE);
    }

    #[test]
    fn cube_volume() {
        let cube = MakeHexahedron::new([
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
            p(0.0, 0.0, 2.0),
            p(2.0, 0.0, 2.0),
            p(2.0, 2.0, 2.0),
            p(0.0, 2.0, 2.0),
        ])
        .execute();
        assert_abs_diff_eq!(volume(&cube), 8.0, epsilon = VOLUME_TOLERANCE);
    }

    #[test]
    fn parallelepiped_volume() {
        let solid = MakeHexahedron::new(parallelepiped()).execute();
        assert_abs_diff_eq!(volume(&solid), 16.0, epsilon = VOLUME_TOLERANCE);
    }

    #[test]
    fn slanted_parallelepiped_volume() {
        // Top face shifted by 1 along y; shear keeps the volume.
        let mut corners = parallelepiped();
        for corner in &mut corners[4..] {
            corner.y += 1.0;
        }
        let solid = MakeHexahedron::new(corners).execute();
        assert_abs_diff_eq!(volume(&solid), 16.0, epsilon = VOLUME_TOLERANCE);
    }

    #[test]
    fn prism_volume() {
        let prism = MakePrism::new([
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(0.0, 4.0, 0.0),
            p(0.0, 0.0, 6.0),
            p(4.0, 0.0, 6.0),
            p(0.0, 4.0, 6.0),
        ])
        .execute();
        // 1/2 * 4 * 4 * 6
        assert_abs_diff_eq!(volume(&prism), 48.0, epsilon = VOLUME_TOLERANCE);
    }

    #[test]
    fn trapezoidal_solid_volume() {
        // Parallelepiped base topped by a wedge that lifts the y = 2 edge to z = 4.
        let mut corners = parallelepiped();
        corners[6].z = 4.0;
        corners[7].z = 4.0;
        let solid = MakeHexahedron::new(corners).execute();
        assert_abs_diff_eq!(volume(&solid), 24.0, epsilon = VOLUME_TOLERANCE);
    }

    #[test]
    fn offset_box_volume() {
        let solid = MakeBox::new(p(1.0, 2.0, 3.0), p(3.0, 5.0, 7.0)).execute();
        // 2 * 3 * 4
        assert_abs_diff_eq!(volume(&solid), 24.0, epsilon = VOLUME_TOLERANCE);
    }

    #[test]
    fn translation_leaves_volume_unchanged() {
        let mut solid = MakeHexahedron::new(parallelepiped()).execute();
        let before = volume(&solid);

        Translate::new(Vector3::new(-13.5, 7.25, 102.0))
            .execute(&mut solid)
            .unwrap();
        assert_abs_diff_eq!(volume(&solid), before, epsilon = VOLUME_TOLERANCE);

        let mut tet = pyramid();
        Translate::new(Vector3::new(3.0, -4.0, 5.0))
            .execute(&mut tet)
            .unwrap();
        assert_abs_diff_eq!(volume(&tet), 1.0 / 6.0, epsilon = VOLUME_TOLERANCE);
    }

    #[test]
    fn scaling_multiplies_volume_by_cube_of_factor() {
        for k in [0.5, 2.0, 3.0] {
            let mut prism = MakePrism::new([
                p(0.0, 0.0, 0.0),
                p(4.0, 0.0, 0.0),
                p(0.0, 4.0, 0.0),
                p(0.0, 0.0, 6.0),
                p(4.0, 0.0, 6.0),
                p(0.0, 4.0, 6.0),
            ])
            .execute();
            Scale::new(p(1.0, 1.0, 1.0), k).execute(&mut prism).unwrap();
            assert_abs_diff_eq!(
                volume(&prism),
                48.0 * k * k * k,
                epsilon = VOLUME_TOLERANCE
            );
        }
    }

    #[test]
    fn flipped_winding_negates_volume() {
        let mut solid = MakeBox::new(p(0.0, 0.0, 0.0), p(2.0, 3.0, 4.0)).execute();
        solid.flip_faces();
        assert_abs_diff_eq!(volume(&solid), -24.0, epsilon = VOLUME_TOLERANCE);
    }

    #[test]
    fn borrowed_slices_match_polyhedron() {
        let solid = pyramid();
        let from_slices = Volume::new(&solid.vertices, &solid.faces)
            .execute()
            .unwrap();
        assert_abs_diff_eq!(from_slices, volume(&solid), epsilon = 1e-12);
    }

    #[test]
    fn flat_buffers_give_same_volume() {
        let coords = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0];
        let indices = [1, 0, 2, 1, 3, 0, 2, 3, 0, 1, 2, 3];
        let solid = Polyhedron::from_flat(&coords, &indices).unwrap();
        assert_abs_diff_eq!(volume(&solid), 1.0 / 6.0, epsilon = VOLUME_TOLERANCE);
    }

    #[test]
    fn no_faces_means_zero_volume() {
        let solid = Polyhedron::new(vec![p(1.0, 2.0, 3.0)], Vec::new());
        assert_eq!(volume(&solid), 0.0);
        assert_eq!(volume(&Polyhedron::default()), 0.0);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut solid = pyramid();
        solid.faces[2] = [2, 4, 0];

        let err = Volume::of(&solid).execute().unwrap_err();
        assert!(matches!(
            err,
            PolyvolError::Mesh(MeshError::IndexOutOfRange {
                face: 2,
                index: 4,
                len: 4
            })
        ));
    }

    #[test]
    fn faces_without_vertices_are_rejected() {
        let faces = [[0, 1, 2]];
        let err = Volume::new(&[], &faces).execute().unwrap_err();
        assert!(matches!(
            err,
            PolyvolError::Mesh(MeshError::IndexOutOfRange {
                face: 0,
                index: 0,
                len: 0
            })
        ));
    }
}
