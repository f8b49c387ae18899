use std::time::Instant;

/// Minimal game clock - just tracks delta time
/// The first tick reports zero elapsed time
#[derive(Debug, Default)]
pub struct Clock {
    last_tick: Option<Instant>,
}

impl Clock {
    pub fn new() -> Self {
        Self { last_tick: None }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        delta
    }
}
