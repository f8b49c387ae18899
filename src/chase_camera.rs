use glam::Vec3;

use crate::camera::Camera;
use crate::config::ChaseConfig;
use crate::math::Transform;

/// Local-space offsets of the chase camera, fixed once constructed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOffsets {
    eye: Vec3,
    look_at: Vec3,
}

impl CameraOffsets {
    pub fn new(eye: Vec3, look_at: Vec3) -> Self {
        Self { eye, look_at }
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }
}

impl From<&ChaseConfig> for CameraOffsets {
    fn from(config: &ChaseConfig) -> Self {
        Self::new(
            Vec3::from_array(config.eye_offset),
            Vec3::from_array(config.look_at_offset),
        )
    }
}

/// Third-person camera that snaps behind and above a target every frame
#[derive(Debug, Clone, Copy)]
pub struct ChaseCamera {
    offsets: CameraOffsets,
}

impl ChaseCamera {
    pub fn new(offsets: CameraOffsets) -> Self {
        Self { offsets }
    }

    pub fn offsets(&self) -> &CameraOffsets {
        &self.offsets
    }

    /// Eye position for a target, in world space
    pub fn ideal_position(&self, target: &Transform) -> Vec3 {
        target.local_to_world(self.offsets.eye)
    }

    /// Look-at point for a target, in world space
    pub fn ideal_look_at(&self, target: &Transform) -> Vec3 {
        target.local_to_world(self.offsets.look_at)
    }

    /// Places and aims the camera. Leaves it untouched when there is no target yet.
    pub fn update(&self, target: Option<&Transform>, camera: &mut Camera) {
        let Some(target) = target else {
            return;
        };
        camera.position = self.ideal_position(target);
        camera.look_at(self.ideal_look_at(target));
    }
}

impl From<&ChaseConfig> for ChaseCamera {
    fn from(config: &ChaseConfig) -> Self {
        Self::new(CameraOffsets::from(config))
    }
}
