use chase_scene::camera::Camera;
use chase_scene::chase_camera::{CameraOffsets, ChaseCamera};
use chase_scene::config::ChaseConfig;
use chase_scene::math::Transform;
use glam::{Quat, Vec3};
use std::f32::consts::PI;

fn chase() -> ChaseCamera {
    ChaseCamera::from(&ChaseConfig::default())
}

#[cfg(test)]
mod chase_camera_tests {
    use super::*;

    #[test]
    fn test_identity_target_at_origin() {
        let mut camera = Camera::default();
        chase().update(Some(&Transform::default()), &mut camera);

        assert_eq!(camera.position, Vec3::new(-15.0, 20.0, -30.0));
        assert_eq!(camera.target, Vec3::new(0.0, 10.0, 50.0));
    }

    #[test]
    fn test_offsets_follow_translation() {
        let mut camera = Camera::default();
        let target = Transform::from_position(Vec3::new(10.0, 0.0, 5.0));
        chase().update(Some(&target), &mut camera);

        assert_eq!(camera.position, Vec3::new(-5.0, 20.0, -25.0));
        assert_eq!(camera.target, Vec3::new(10.0, 10.0, 55.0));
    }

    #[test]
    fn test_half_turn_swings_camera_around() {
        let mut camera = Camera::default();
        let target = Transform::new(Vec3::ZERO, Quat::from_rotation_y(PI), 1.0);
        chase().update(Some(&target), &mut camera);

        assert!(
            camera.position.abs_diff_eq(Vec3::new(15.0, 20.0, 30.0), 1e-4),
            "Camera at {}",
            camera.position
        );
        assert!(camera.target.abs_diff_eq(Vec3::new(0.0, 10.0, -50.0), 1e-4));
    }

    #[test]
    fn test_camera_always_looks_ahead_of_target() {
        let camera_rig = chase();
        for step in 0..8 {
            let yaw = step as f32 * PI / 4.0;
            let target = Transform::new(Vec3::new(3.0, 0.0, -7.0), Quat::from_rotation_y(yaw), 0.1);
            let mut camera = Camera::default();
            camera_rig.update(Some(&target), &mut camera);

            let heading = target.rotation * Vec3::Z;
            assert!(camera.forward().dot(heading) > 0.0);
            assert!(camera.position.y > target.position.y);
        }
    }

    #[test]
    fn test_scale_does_not_change_offsets() {
        let mut camera = Camera::default();
        let target = Transform::new(Vec3::ZERO, Quat::IDENTITY, 0.1);
        chase().update(Some(&target), &mut camera);
        assert_eq!(camera.position, Vec3::new(-15.0, 20.0, -30.0));
    }

    #[test]
    fn test_no_target_leaves_camera() {
        let mut camera = Camera::default();
        let before = camera;
        chase().update(None, &mut camera);
        assert_eq!(camera, before);
    }

    #[test]
    fn test_custom_offsets() {
        let rig = ChaseCamera::new(CameraOffsets::new(Vec3::new(0.0, 5.0, -10.0), Vec3::Z));
        let mut camera = Camera::default();
        rig.update(Some(&Transform::default()), &mut camera);

        assert_eq!(camera.position, Vec3::new(0.0, 5.0, -10.0));
        assert_eq!(camera.target, Vec3::Z);
        assert_eq!(rig.offsets().eye(), Vec3::new(0.0, 5.0, -10.0));
    }
}
