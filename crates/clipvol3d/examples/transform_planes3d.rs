extern crate nalgebra as na;

use clipvol3d::math::Point;
use clipvol3d::transformation::{cylindrical_planes, utils};
use na::{Matrix4, Vector3};

fn main() {
    let planes = cylindrical_planes(8, 1.0);

    // One destination buffer, reused across frames.
    let mut buffer = utils::plane_buffer(planes.len());

    for frame in 0..60 {
        let pose = Matrix4::new_translation(&Vector3::new(frame as f32 * 0.1, 0.0, 0.0));
        utils::transform_planes(&mut buffer, &planes, &pose);

        // The prism follows the pose.
        let center = pose.transform_point(&Point::origin());
        assert!(buffer.iter().all(|p| p.contains_point(&center)));
    }
}
