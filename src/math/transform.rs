use glam::{Mat4, Quat, Vec3};

/// World placement of an entity: position, orientation and uniform scale
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Rotates a local-space offset by this orientation and moves it to this position
    pub fn local_to_world(&self, offset: Vec3) -> Vec3 {
        self.rotation * offset + self.position
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn local_to_world_identity() {
        let t = Transform::default();
        assert_eq!(t.local_to_world(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn local_to_world_ignores_scale() {
        let t = Transform::new(Vec3::new(10.0, 0.0, 0.0), Quat::IDENTITY, 0.1);
        assert_eq!(t.local_to_world(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(10.0, 1.0, 0.0));
    }

    #[test]
    fn local_to_world_rotated_quarter_turn() {
        let t = Transform::new(Vec3::ZERO, Quat::from_rotation_y(PI / 2.0), 1.0);
        let world = t.local_to_world(Vec3::Z);
        assert!(world.abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn matrix_applies_scale_then_translation() {
        let t = Transform::new(Vec3::new(-33.0, 0.0, 0.0), Quat::IDENTITY, 0.1);
        let p = t.matrix().transform_point3(Vec3::new(0.0, 180.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(-33.0, 18.0, 0.0), 1e-4));
    }
}
