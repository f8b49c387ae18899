/// Named animation clip; only its timing matters to the mixer
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
}

impl AnimationClip {
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
        }
    }
}

/// Playback state of one clip
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: AnimationClip,
    time: f32,
    playing: bool,
}

impl AnimationAction {
    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
        self.time = 0.0;
    }

    fn advance(&mut self, dt: f32) {
        if !self.playing || self.clip.duration <= 0.0 {
            return;
        }
        self.time = (self.time + dt).rem_euclid(self.clip.duration);
    }
}

/// Per-model clip player, advanced once per frame
#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    actions: Vec<AnimationAction>,
}

impl AnimationMixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a clip (stopped) and returns its action
    pub fn clip_action(&mut self, clip: AnimationClip) -> &mut AnimationAction {
        self.actions.push(AnimationAction {
            clip,
            time: 0.0,
            playing: false,
        });
        let last = self.actions.len() - 1;
        &mut self.actions[last]
    }

    pub fn actions(&self) -> &[AnimationAction] {
        &self.actions
    }

    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        for action in &mut self.actions {
            action.advance(dt);
        }
    }
}
