use clipvol3d::math::Point;
use clipvol3d::transformation::cylindrical_planes;

fn main() {
    // A hexagonal prism of inradius 1 around the y axis.
    let planes = cylindrical_planes(6, 1.0);

    assert_eq!(planes.len(), 6);

    let inside = Point::new(0.5, 10.0, 0.0);
    let outside = Point::new(1.5, 0.0, 0.0);

    assert!(planes.iter().all(|p| p.contains_point(&inside)));
    assert!(planes.iter().any(|p| !p.contains_point(&outside)));
}
