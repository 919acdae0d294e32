use clipvol3d::math::{Point, Real};
use clipvol3d::transformation::{planes_from_mesh, try_planes_from_mesh, PlanesFromMeshError};

/// A regular tetrahedron centered at the origin, with every triangle wound
/// counter-clockwise as seen from outside.
fn build_tetrahedron() -> (Vec<Point<Real>>, Vec<u32>) {
    let vertices = vec![
        Point::new(1.0, 1.0, 1.0),
        Point::new(1.0, -1.0, -1.0),
        Point::new(-1.0, 1.0, -1.0),
        Point::new(-1.0, -1.0, 1.0),
    ];
    let indices = vec![0, 1, 2, 0, 2, 3, 0, 3, 1, 1, 3, 2];
    (vertices, indices)
}

#[test]
fn tetrahedron_yields_one_plane_per_triangle() {
    let (vertices, indices) = build_tetrahedron();
    let planes = planes_from_mesh(&vertices, &indices);

    assert_eq!(planes.len(), 4);

    for (plane, triangle) in planes.iter().zip(indices.chunks_exact(3)) {
        // The plane contains all three vertices of its triangle.
        for &index in triangle {
            let vertex = vertices[index as usize];
            assert!(relative_eq!(
                plane.normal.dot(&vertex.coords),
                plane.offset,
                epsilon = 1.0e-5
            ));
        }

        assert!(relative_eq!(plane.normal.norm(), 1.0, epsilon = 1.0e-5));

        // Outward winding: the centroid (the origin) is inside of every
        // half-space, strictly.
        assert!(plane.signed_distance(&Point::origin()) < 0.0);
    }
}

#[test]
fn empty_mesh_yields_no_planes() {
    let planes = planes_from_mesh(&[], &[]);
    assert!(planes.is_empty());
}

#[test]
fn degenerate_triangle_yields_a_non_finite_normal() {
    let vertices = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 1.0),
        Point::new(2.0, 2.0, 2.0),
    ];
    let planes = planes_from_mesh(&vertices, &[0, 1, 2]);

    assert_eq!(planes.len(), 1);
    assert!(!planes[0].normal.x.is_finite());
}

#[test]
#[should_panic]
fn panics_on_a_partial_triangle() {
    let (vertices, _) = build_tetrahedron();
    let _ = planes_from_mesh(&vertices, &[0, 1, 2, 0]);
}

#[test]
#[should_panic]
fn panics_on_an_out_of_bounds_index() {
    let (vertices, _) = build_tetrahedron();
    let _ = planes_from_mesh(&vertices, &[0, 1, 7]);
}

#[test]
fn try_builder_rejects_a_partial_triangle() {
    let (vertices, _) = build_tetrahedron();

    assert_eq!(
        try_planes_from_mesh(&vertices, &[0, 1, 2, 0]),
        Err(PlanesFromMeshError::InvalidIndexCount(4))
    );
}

#[test]
fn try_builder_rejects_an_out_of_bounds_index() {
    let (vertices, _) = build_tetrahedron();

    assert_eq!(
        try_planes_from_mesh(&vertices, &[0, 1, 2, 1, 7, 3]),
        Err(PlanesFromMeshError::IndexOutOfBounds {
            triangle: 1,
            index: 7,
            nvertices: 4,
        })
    );
}

#[test]
fn try_builder_matches_the_panicking_builder_on_well_formed_input() {
    let (vertices, indices) = build_tetrahedron();

    let checked = try_planes_from_mesh(&vertices, &indices).unwrap();
    let unchecked = planes_from_mesh(&vertices, &indices);

    assert_eq!(checked, unchecked);
}
