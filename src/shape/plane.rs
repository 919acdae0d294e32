//! The clipping plane shape.

use crate::math::{Matrix3, Matrix4, Point, Real, Vector, DEFAULT_EPSILON};
use na::Unit;

/// A clipping plane.
///
/// The plane contains every point `x` such that `normal · x == offset`. It
/// delimits the half-space of points satisfying `normal · x <= offset`, i.e.
/// the normal points out of the retained region.
///
/// Most operations assume the normal is unit-length. Planes built by this
/// crate always are; see [`Plane::normalized`] for planes built by hand.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck-serialize", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Plane {
    /// The plane's outward normal.
    pub normal: Vector<Real>,
    /// The plane's signed distance from the origin, measured along the normal.
    pub offset: Real,
}

// A plane packs into exactly four reals (a GPU-friendly layout).
static_assertions::assert_eq_size!(Plane, [Real; 4]);

impl Plane {
    /// Builds a new plane from its outward normal and its signed distance from the origin.
    #[inline]
    pub fn new(normal: Vector<Real>, offset: Real) -> Plane {
        Plane { normal, offset }
    }

    /// Builds the plane containing the three given points.
    ///
    /// The normal is the normalized cross product `(b - a) × (c - a)`:
    /// triangles wound counter-clockwise when seen from outside of a convex
    /// volume yield planes whose normals point out of the volume.
    ///
    /// If the points are (nearly) collinear, the resulting plane has a
    /// non-finite normal. Use [`Plane::try_from_coplanar_points`] to detect
    /// this case instead.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use clipvol3d::na::Point3;
    /// use clipvol3d::shape::Plane;
    ///
    /// let plane = Plane::from_coplanar_points(
    ///     Point3::new(0.0, 1.0, 0.0),
    ///     Point3::new(1.0, 1.0, 0.0),
    ///     Point3::new(0.0, 1.0, 1.0),
    /// );
    ///
    /// assert_eq!(plane.normal.y, -1.0);
    /// assert_eq!(plane.offset, -1.0);
    /// # }
    /// ```
    pub fn from_coplanar_points(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Plane {
        let normal = (b - a).cross(&(c - a)).normalize();
        Plane::new(normal, normal.dot(&a.coords))
    }

    /// Builds the plane containing the three given points, or `None` if the
    /// points are (nearly) collinear.
    pub fn try_from_coplanar_points(
        a: Point<Real>,
        b: Point<Real>,
        c: Point<Real>,
    ) -> Option<Plane> {
        let normal = Unit::try_new((b - a).cross(&(c - a)), DEFAULT_EPSILON)?;
        Some(Plane::new(normal.into_inner(), normal.dot(&a.coords)))
    }

    /// The signed distance between this plane and the given point.
    ///
    /// The result is positive on the side the normal points toward, negative
    /// on the other side, and zero on the plane itself.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    /// Returns `true` if the given point lies inside of the half-space
    /// delimited by this plane.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.signed_distance(pt) <= 0.0
    }

    /// Projects the given point orthogonally onto this plane.
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - self.normal * self.signed_distance(pt)
    }

    /// The point of this plane that is closest to the origin.
    #[inline]
    pub fn coplanar_point(&self) -> Point<Real> {
        Point::from(self.normal * self.offset)
    }

    /// This plane with its orientation reversed.
    ///
    /// The flipped plane contains the same points but delimits the
    /// complementary half-space.
    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane::new(-self.normal, -self.offset)
    }

    /// This plane rescaled so that its normal is unit-length.
    ///
    /// The offset is rescaled by the same factor, leaving the plane surface
    /// unchanged. The result is non-finite if the normal is zero.
    pub fn normalized(&self) -> Plane {
        let inv_norm = 1.0 / self.normal.norm();
        Plane::new(self.normal * inv_norm, self.offset * inv_norm)
    }

    /// Transforms this plane by the affine transformation `m` in place.
    #[inline]
    pub fn transform_by(&mut self, m: &Matrix4<Real>) {
        *self = self.transformed(m);
    }

    /// Returns this plane transformed by the affine transformation `m`.
    ///
    /// The normal is multiplied by the inverse-transpose of the linear part
    /// of `m` and re-normalized, and the offset is recomputed from a
    /// transformed point of the plane. The result is correct even if `m`
    /// contains non-uniform scaling or shearing; see
    /// [`crate::utils::normal_matrix`].
    pub fn transformed(&self, m: &Matrix4<Real>) -> Plane {
        self.transformed_with_normal_matrix(m, &crate::utils::normal_matrix(m))
    }

    /// Returns this plane transformed by `m`, with a pre-computed normal
    /// matrix.
    ///
    /// When transforming many planes by the same `m`, compute
    /// [`crate::utils::normal_matrix`] once and use this method rather than
    /// [`Plane::transformed`].
    pub fn transformed_with_normal_matrix(
        &self,
        m: &Matrix4<Real>,
        normal_matrix: &Matrix3<Real>,
    ) -> Plane {
        let reference = m.transform_point(&self.coplanar_point());
        let normal = (normal_matrix * self.normal).normalize();
        Plane::new(normal, normal.dot(&reference.coords))
    }
}

impl approx::AbsDiffEq for Plane {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.offset.abs_diff_eq(&other.offset, epsilon)
    }
}

impl approx::RelativeEq for Plane {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.offset.relative_eq(&other.offset, epsilon, max_relative)
    }
}

impl Default for Plane {
    /// The plane through the origin, with a normal equal to the `x` axis.
    fn default() -> Plane {
        Plane::new(Vector::x(), 0.0)
    }
}
