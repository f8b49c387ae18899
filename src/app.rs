use glam::{Quat, Vec3};

use crate::animation::{AnimationClip, AnimationMixer};
use crate::camera::Camera;
use crate::chase_camera::ChaseCamera;
use crate::config::SceneConfig;
use crate::core::{Controller, InputState, WinitController};
use crate::loaders::{AssetLoader, ModelData, PendingAsset};
use crate::locomotion::LocomotionModel;
use crate::math::Transform;
use crate::scene::{Entity, Scene};

/// Composition root: owns the scene, input, controls and pending loads
pub struct App {
    config: SceneConfig,
    scene: Scene,
    camera: Camera,
    controller: WinitController,
    locomotion: LocomotionModel,
    chase: ChaseCamera,
    mixers: Vec<AnimationMixer>,
    /// Scene index of the controlled entity, once its model has loaded
    target: Option<usize>,
    pending_model: Option<PendingAsset<ModelData>>,
    pending_clips: Option<PendingAsset<Vec<AnimationClip>>>,
    /// Clips that resolved before their model
    held_clips: Option<Vec<AnimationClip>>,
}

impl App {
    /// Builds the scene without starting any loads
    pub fn new(config: SceneConfig) -> Self {
        let mut camera = Camera::new(&config.camera);
        camera.look_at(Vec3::ZERO);

        Self {
            scene: Scene::new(&config),
            camera,
            controller: WinitController::new(),
            locomotion: LocomotionModel::new(&config.locomotion),
            chase: ChaseCamera::from(&config.chase),
            mixers: Vec::new(),
            target: None,
            pending_model: None,
            pending_clips: None,
            held_clips: None,
            config,
        }
    }

    /// Starts loading the configured model and its animation in the background
    pub fn start_loading(&mut self) {
        let model = &self.config.model;
        let loader = AssetLoader::new(&model.path);
        self.pending_model = Some(loader.load_model(&model.base_model));
        self.pending_clips = model.animation.as_deref().map(|file| loader.load_animations(file));
    }

    /// Binds a box stand-in instead of loading files
    pub fn use_placeholder(&mut self) {
        self.pending_model = None;
        self.pending_clips = None;
        self.held_clips = None;
        self.bind_model(ModelData::placeholder());
    }

    /// Places a model at the configured position and makes it the controlled target
    pub fn bind_model(&mut self, model: ModelData) {
        let transform = Transform::new(
            Vec3::from_array(self.config.model.position),
            Quat::IDENTITY,
            self.config.model.scale,
        );
        log::info!("Binding model '{}' ({} parts)", model.name, model.parts.len());

        let entity = Entity::from_model(model, transform);
        match self.target {
            Some(index) if index < self.scene.entities.len() => self.scene.entities[index] = entity,
            _ => self.target = Some(self.scene.add(entity)),
        }
    }

    /// Creates a mixer on the bound model and plays the first clip
    ///
    /// Clips without a bound model are dropped.
    pub fn bind_clips(&mut self, clips: Vec<AnimationClip>) {
        if self.target.is_none() {
            log::warn!("Dropping {} animation clips: no model bound", clips.len());
            return;
        }

        let mut mixer = AnimationMixer::new();
        for (i, clip) in clips.into_iter().enumerate() {
            log::info!("Animation clip '{}' ({:.2}s)", clip.name, clip.duration);
            let action = mixer.clip_action(clip);
            if i == 0 {
                action.play();
            }
        }
        self.mixers.push(mixer);
    }

    /// Single resolution point for background loads
    pub fn poll_assets(&mut self) {
        if let Some(result) = self.pending_model.as_mut().and_then(|p| p.poll()) {
            if let Some(pending) = self.pending_model.take() {
                self.resolve_model(pending.label(), result);
            }
        }

        if let Some(result) = self.pending_clips.as_mut().and_then(|p| p.poll()) {
            if let Some(pending) = self.pending_clips.take() {
                self.resolve_clips(pending.label(), result);
            }
        }
    }

    /// Blocks until every pending load resolves, then binds the results
    pub fn finish_loading(&mut self) {
        if let Some(mut pending) = self.pending_model.take() {
            if let Some(result) = pending.wait() {
                self.resolve_model(pending.label(), result);
            }
        }
        if let Some(mut pending) = self.pending_clips.take() {
            if let Some(result) = pending.wait() {
                self.resolve_clips(pending.label(), result);
            }
        }
    }

    fn resolve_model(&mut self, label: &str, result: anyhow::Result<ModelData>) {
        match result {
            Ok(model) => {
                self.bind_model(model);
                if let Some(clips) = self.held_clips.take() {
                    self.bind_clips(clips);
                }
            }
            Err(e) => {
                log::error!("Model load failed ({}): {:#}", label, e);
                let pending = self.pending_clips.take().is_some();
                let held = self.held_clips.take().is_some();
                if pending || held {
                    log::warn!("Discarding animation for {}: model did not load", label);
                }
            }
        }
    }

    fn resolve_clips(&mut self, label: &str, result: anyhow::Result<Vec<AnimationClip>>) {
        match result {
            Ok(clips) if self.target.is_none() && self.pending_model.is_some() => {
                log::debug!("Holding {} clips from {} until the model binds", clips.len(), label);
                self.held_clips = Some(clips);
            }
            Ok(clips) => self.bind_clips(clips),
            Err(e) => log::error!("Animation load failed ({}): {:#}", label, e),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_model.is_some() || self.pending_clips.is_some() || self.held_clips.is_some()
    }

    /// One frame: loads, animation, locomotion, then the camera
    pub fn step(&mut self, elapsed: f32) {
        self.poll_assets();

        for mixer in &mut self.mixers {
            mixer.update(elapsed);
        }

        let input = self.controller.input_state();
        let target = self.target;
        let transform = target
            .and_then(|index| self.scene.entity_mut(index))
            .map(|entity| &mut entity.transform);
        self.locomotion.update(&input, transform, elapsed);

        let transform = self.target_transform();
        self.chase.update(transform.as_ref(), &mut self.camera);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn target_transform(&self) -> Option<Transform> {
        self.target
            .and_then(|index| self.scene.entity(index))
            .map(|entity| entity.transform)
    }

    pub fn input_state(&self) -> InputState {
        self.controller.input_state()
    }

    pub fn controller(&self) -> &WinitController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut WinitController {
        &mut self.controller
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn locomotion(&self) -> &LocomotionModel {
        &self.locomotion
    }

    pub fn mixers(&self) -> &[AnimationMixer] {
        &self.mixers
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}
