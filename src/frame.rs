use crate::core::Clock;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Frame timing and iteration abstraction
pub trait FrameSource: Iterator<Item = FrameInfo> {
    /// Get the total number of frames produced
    fn frame_count(&self) -> u64;
}

/// Infinite iterator over wall-clock frames
/// The first frame always carries a zero delta
#[derive(Debug, Default)]
pub struct FrameIterator {
    frame_number: u64,
    time: f32,
    clock: Clock,
}

impl FrameIterator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let delta = self.clock.tick();
        self.time += delta;

        let info = FrameInfo::new(self.frame_number, self.time, delta);
        self.frame_number += 1;
        Some(info)
    }
}

impl FrameSource for FrameIterator {
    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}

/// Deterministic frames with a constant step, for headless runs and tests
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    step: f32,
    frame_number: u64,
    remaining: Option<u64>,
}

impl FixedStepFrames {
    /// `limit` of `None` yields frames forever
    pub fn new(step: f32, limit: Option<u64>) -> Self {
        Self {
            step: step.max(0.0),
            frame_number: 0,
            remaining: limit,
        }
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        let delta = if self.frame_number == 0 { 0.0 } else { self.step };
        let time = self.frame_number as f32 * self.step;
        let info = FrameInfo::new(self.frame_number, time, delta);
        self.frame_number += 1;
        Some(info)
    }
}

impl FrameSource for FixedStepFrames {
    fn frame_count(&self) -> u64 {
        self.frame_number
    }
}
