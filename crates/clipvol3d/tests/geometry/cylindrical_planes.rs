use clipvol3d::math::{Point, Real, Vector};
use clipvol3d::transformation::cylindrical_planes;
use clipvol3d::transformation::utils::transformed_planes;
use na::{RealField, UnitQuaternion};
use std::f64::consts::PI;

#[test]
fn four_planes_are_axis_aligned() {
    let planes = cylindrical_planes(4, 2.0);

    assert_eq!(planes.len(), 4);

    let expected = [
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 1.0),
        Vector::new(-1.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, -1.0),
    ];

    for (plane, normal) in planes.iter().zip(expected.iter()) {
        assert!(relative_eq!(plane.normal, *normal, epsilon = 1.0e-6));
        assert_eq!(plane.offset, 2.0);
    }

    // Opposite planes of the square prism are antiparallel.
    assert!(relative_eq!(
        planes[0].normal,
        -planes[2].normal,
        epsilon = 1.0e-6
    ));
    assert!(relative_eq!(
        planes[1].normal,
        -planes[3].normal,
        epsilon = 1.0e-6
    ));
}

#[test]
fn normals_sweep_the_full_circle() {
    let n = 17;
    let planes = cylindrical_planes(n, 0.5);

    for (i, plane) in planes.iter().enumerate() {
        let theta = 2.0 * PI * (i as f64) / (n as f64);

        assert!(relative_eq!(
            plane.normal.x,
            theta.cos() as Real,
            epsilon = 1.0e-5
        ));
        assert_eq!(plane.normal.y, 0.0);
        assert!(relative_eq!(
            plane.normal.z,
            theta.sin() as Real,
            epsilon = 1.0e-5
        ));
        assert_eq!(plane.offset, 0.5);
    }
}

#[test]
fn zero_planes_yield_an_empty_set() {
    assert!(cylindrical_planes(0, 1.0).is_empty());
}

#[test]
fn negative_inradius_excludes_the_axis() {
    let planes = cylindrical_planes(3, -1.0);

    for plane in &planes {
        assert!(!plane.contains_point(&Point::origin()));
    }
}

#[test]
fn rotation_about_the_axis_permutes_the_planes() {
    // Rotating the prism about its own axis by one face step maps the plane
    // set onto itself, shifted by one.
    let n = 8;
    let planes = cylindrical_planes(n as u32, 1.5);

    let step = Real::two_pi() / (n as Real);
    let rotation = UnitQuaternion::from_axis_angle(&Vector::y_axis(), step);
    let rotated = transformed_planes(&planes, &rotation.to_homogeneous());

    for (i, plane) in rotated.iter().enumerate() {
        let shifted = &planes[(i + n - 1) % n];

        assert!(relative_eq!(plane, shifted, epsilon = 1.0e-5));
    }
}
