use crate::math::{Matrix3, Matrix4, Real};

/// Computes the matrix that transforms surface normals under the affine map `m`.
///
/// This is the inverse-transpose of the 3×3 linear block of `m`. Multiplying a
/// normal by this matrix (and re-normalizing) keeps it perpendicular to its
/// surface even when `m` contains non-uniform scaling or shearing, which a
/// direct multiplication by the linear block would not.
///
/// If the linear block of `m` is singular, the identity is returned instead
/// and a warning is logged. A singular transform collapses the space and has
/// no meaningful action on normals.
pub fn normal_matrix(m: &Matrix4<Real>) -> Matrix3<Real> {
    let linear = m.fixed_view::<3, 3>(0, 0).into_owned();

    if let Some(inverse) = linear.try_inverse() {
        inverse.transpose()
    } else {
        log::warn!("singular transformation matrix, leaving normals unchanged");
        Matrix3::identity()
    }
}
