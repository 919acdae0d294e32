use crate::math::{Real, Vector};
use crate::shape::Plane;
use crate::transformation::utils;
use alloc::vec::Vec;
use na::{ComplexField, RealField};
use num::Zero;

/// Builds `nplanes` clipping planes arranged radially around the `y` axis.
///
/// Plane `i` has normal `(cos θᵢ, 0, sin θᵢ)` with `θᵢ = 2πi / nplanes` and
/// offset `inner_radius`. The intersection of the half-spaces is an infinite
/// prism with axis `y` whose regular `nplanes`-sided cross-section has
/// inradius `inner_radius`, a ready-made clipping volume that needs no mesh
/// input.
///
/// `nplanes = 0` returns an empty vector. `inner_radius` is not validated; a
/// negative value flips every half-space to the far side of the axis.
pub fn cylindrical_planes(nplanes: u32, inner_radius: Real) -> Vec<Plane> {
    let dtheta = Real::two_pi() / (nplanes as Real);
    let mut curr_theta = Real::zero();
    let mut result = utils::plane_buffer(nplanes as usize);

    for plane in &mut result {
        plane.normal = Vector::new(
            ComplexField::cos(curr_theta),
            0.0,
            ComplexField::sin(curr_theta),
        );
        plane.offset = inner_radius;
        curr_theta += dtheta;
    }

    result
}
