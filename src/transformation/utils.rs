//! Low-level utilities for clipping-plane buffer management.
//!
//! Separating allocation ([`plane_buffer`]) from population ([`transform_planes`])
//! lets a render loop reuse one destination buffer across frames instead of
//! allocating a fresh plane set on every transform.
//!
//! ```
//! # #[cfg(feature = "f32")] {
//! use clipvol3d::na::Matrix4;
//! use clipvol3d::transformation::{cylindrical_planes, utils};
//!
//! let planes = cylindrical_planes(6, 1.0);
//! let mut buffer = utils::plane_buffer(planes.len());
//!
//! // Once per frame, with the object's current pose:
//! let pose = Matrix4::new_translation(&[0.0, 2.0, 0.0].into());
//! utils::transform_planes(&mut buffer, &planes, &pose);
//! # }
//! ```

use crate::math::{Matrix4, Real};
use crate::shape::Plane;
use crate::utils;
use alloc::{vec, vec::Vec};

/// Allocates a buffer of `n` placeholder planes.
///
/// The returned planes are valid values ([`Plane::default`]) but carry no
/// meaning until overwritten, typically by [`transform_planes`]. `n = 0`
/// yields an empty buffer.
pub fn plane_buffer(n: usize) -> Vec<Plane> {
    vec![Plane::default(); n]
}

/// Overwrites the start of `planes_out` with the planes of `planes_in`
/// transformed by `m`.
///
/// Only the first `planes_in.len()` destination slots are written; any excess
/// destination planes are left untouched. The normal matrix of `m` is computed
/// once and shared by every plane, so this is cheaper than calling
/// [`Plane::transformed`] in a loop.
///
/// # Panics
///
/// Panics if `planes_out` is shorter than `planes_in`.
pub fn transform_planes(planes_out: &mut [Plane], planes_in: &[Plane], m: &Matrix4<Real>) {
    let normal_matrix = utils::normal_matrix(m);

    for (out, plane) in planes_out[..planes_in.len()].iter_mut().zip(planes_in.iter()) {
        *out = plane.transformed_with_normal_matrix(m, &normal_matrix);
    }
}

/// Returns the planes of `planes_in` transformed by `m` in a freshly allocated
/// buffer.
pub fn transformed_planes(planes_in: &[Plane], m: &Matrix4<Real>) -> Vec<Plane> {
    let mut out = plane_buffer(planes_in.len());
    transform_planes(&mut out, planes_in, m);
    out
}
