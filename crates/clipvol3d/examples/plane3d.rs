use clipvol3d::math::{Point, Vector};
use clipvol3d::shape::Plane;

fn main() {
    let plane = Plane::new(Vector::y(), 1.0);

    assert!(plane.contains_point(&Point::origin()));
    assert!(!plane.contains_point(&Point::new(0.0, 2.0, 0.0)));
    assert_eq!(plane.signed_distance(&Point::new(5.0, 3.0, -5.0)), 2.0);
}
