use glam::{Quat, Vec3};
use std::f32::consts::PI;

use crate::config::LocomotionConfig;
use crate::core::InputState;
use crate::math::Transform;

/// Keyboard-driven walking for a single entity.
///
/// Velocity lives in the entity's local frame: `x` is lateral, `y` is unused
/// and `z` is forward. Each update damps it, applies held input, then moves
/// the target along its own forward and sideways axes.
#[derive(Debug, Clone)]
pub struct LocomotionModel {
    deceleration: Vec3,
    forward_acceleration: f32,
    turn_rate: f32,
    velocity: Vec3,
}

impl LocomotionModel {
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            deceleration: Vec3::from_array(config.deceleration),
            forward_acceleration: config.forward_acceleration,
            turn_rate: config.turn_rate,
            velocity: Vec3::ZERO,
        }
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Advances one frame. Without a target nothing changes, velocity included.
    pub fn update(&mut self, input: &InputState, target: Option<&mut Transform>, elapsed: f32) {
        let Some(target) = target else {
            return;
        };
        let dt = elapsed.max(0.0);

        self.velocity += self.frame_deceleration(dt);

        if input.forward {
            self.velocity.z += self.forward_acceleration * dt;
        }
        if input.backward {
            self.velocity.z -= self.forward_acceleration * dt;
        }

        let mut rotation = target.rotation;
        if input.left {
            rotation *= Quat::from_axis_angle(Vec3::Y, PI * dt * self.turn_rate);
        }
        if input.right {
            rotation *= Quat::from_axis_angle(Vec3::Y, -PI * dt * self.turn_rate);
        }
        target.rotation = rotation.normalize();

        let forward = (target.rotation * Vec3::Z).normalize() * (self.velocity.z * dt);
        let sideways = (target.rotation * Vec3::X).normalize() * (self.velocity.x * dt);
        target.position += forward + sideways;
    }

    /// Damping for this frame, clamped per axis so no axis crosses zero
    fn frame_deceleration(&self, dt: f32) -> Vec3 {
        let decel = self.velocity * self.deceleration * dt;
        decel.signum() * decel.abs().min(self.velocity.abs())
    }
}
