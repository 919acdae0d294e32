//! The clipping-plane shape.

pub use self::plane::Plane;

mod plane;
