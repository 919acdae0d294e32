use clipvol3d::math::Point;
use clipvol3d::transformation::planes_from_mesh;

fn main() {
    // A tetrahedron centered at the origin, triangles wound
    // counter-clockwise as seen from outside.
    let vertices = [
        Point::new(1.0f32, 1.0, 1.0),
        Point::new(1.0, -1.0, -1.0),
        Point::new(-1.0, 1.0, -1.0),
        Point::new(-1.0, -1.0, 1.0),
    ];
    let indices = [0, 1, 2, 0, 2, 3, 0, 3, 1, 1, 3, 2];

    let planes = planes_from_mesh(&vertices, &indices);

    assert_eq!(planes.len(), 4);

    // The centroid lies inside of the clipping volume.
    assert!(planes.iter().all(|p| p.contains_point(&Point::origin())));
}
