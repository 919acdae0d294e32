use crate::math::{Point, Real};
use crate::shape::Plane;
use alloc::vec::Vec;

/// Errors that can occur when building a plane set from a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlanesFromMeshError {
    /// The index count does not describe whole triangles.
    #[error("the number of indices ({0}) is not a multiple of 3.")]
    InvalidIndexCount(usize),
    /// An index points outside of the vertex buffer.
    #[error("index {index} of triangle {triangle} is out of bounds ({nvertices} vertices).")]
    IndexOutOfBounds {
        /// The triangle containing the out-of-bounds index.
        triangle: u32,
        /// The offending index.
        index: u32,
        /// The length of the vertex buffer.
        nvertices: usize,
    },
}

/// Builds the clipping volume bounded by a convex triangle mesh.
///
/// Each consecutive triple of `indices` names one triangle of the mesh by
/// vertex index, and yields the plane containing its three vertices. With
/// triangles wound counter-clockwise as seen from outside, every normal
/// points out of the mesh and the planes' half-space intersection is the
/// mesh interior.
///
/// A zero-area triangle produces a plane with a non-finite normal. This is
/// not an error; see [`Plane::try_from_coplanar_points`] for the guarded
/// per-triangle constructor.
///
/// # Panics
///
/// Panics if `indices.len()` is not a multiple of 3, or if an index is out
/// of bounds of `vertices`. Use [`try_planes_from_mesh`] when the mesh comes
/// from an untrusted source.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use clipvol3d::na::Point3;
/// use clipvol3d::transformation::planes_from_mesh;
///
/// // One triangle in the y = 1 plane, wound so the normal points down.
/// let vertices = [
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 1.0),
/// ];
/// let planes = planes_from_mesh(&vertices, &[0, 1, 2]);
///
/// assert_eq!(planes.len(), 1);
/// assert_eq!(planes[0].normal.y, -1.0);
/// # }
/// ```
pub fn planes_from_mesh(vertices: &[Point<Real>], indices: &[u32]) -> Vec<Plane> {
    assert!(
        indices.len() % 3 == 0,
        "the number of indices ({}) must be a multiple of 3",
        indices.len()
    );

    indices
        .chunks_exact(3)
        .enumerate()
        .map(|(i, triangle)| {
            let plane = Plane::from_coplanar_points(
                vertices[triangle[0] as usize],
                vertices[triangle[1] as usize],
                vertices[triangle[2] as usize],
            );

            if !plane.normal.x.is_finite() {
                log::debug!("triangle {} is degenerate, its plane normal is not finite", i);
            }

            plane
        })
        .collect()
}

/// Same as [`planes_from_mesh`], except that malformed indexing data is
/// reported as an error instead of a panic.
///
/// Degenerate triangles are still accepted; only the indexing contract is
/// validated, so both builders agree on every well-formed mesh.
pub fn try_planes_from_mesh(
    vertices: &[Point<Real>],
    indices: &[u32],
) -> Result<Vec<Plane>, PlanesFromMeshError> {
    if indices.len() % 3 != 0 {
        return Err(PlanesFromMeshError::InvalidIndexCount(indices.len()));
    }

    for (i, triangle) in indices.chunks_exact(3).enumerate() {
        for &index in triangle {
            if index as usize >= vertices.len() {
                return Err(PlanesFromMeshError::IndexOutOfBounds {
                    triangle: i as u32,
                    index,
                    nvertices: vertices.len(),
                });
            }
        }
    }

    Ok(planes_from_mesh(vertices, indices))
}
