use glam::Vec3;
use std::fmt;

use crate::app::App;
use crate::core::Button;
use crate::frame::FrameSource;
use crate::math::Transform;

/// State of the scene after a headless run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessReport {
    pub frames: u64,
    pub elapsed: f32,
    pub target: Option<Transform>,
    pub velocity: Vec3,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
}

impl fmt::Display for HeadlessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frames: {} ({:.2}s)", self.frames, self.elapsed)?;
        match &self.target {
            Some(t) => {
                writeln!(f, "target position: {:.3}", t.position)?;
                writeln!(f, "target rotation: {:.4}", t.rotation)?;
            }
            None => writeln!(f, "target: not loaded")?,
        }
        writeln!(f, "velocity: {:.3}", self.velocity)?;
        writeln!(f, "camera position: {:.3}", self.camera_position)?;
        write!(f, "camera look-at: {:.3}", self.camera_target)
    }
}

/// Steps `app` through every frame with `held` keys down the whole time
pub fn run(app: &mut App, frames: impl FrameSource, held: &[Button]) -> HeadlessReport {
    for &button in held {
        app.controller_mut().apply(button, true);
    }

    let mut count = 0;
    let mut elapsed = 0.0;
    for frame in frames {
        app.step(frame.delta);
        count += 1;
        elapsed += frame.delta;
    }

    for &button in held {
        app.controller_mut().apply(button, false);
    }

    let report = HeadlessReport {
        frames: count,
        elapsed,
        target: app.target_transform(),
        velocity: app.locomotion().velocity(),
        camera_position: app.camera().position,
        camera_target: app.camera().target,
    };
    log::info!("Headless run finished after {} frames", report.frames);
    report
}
