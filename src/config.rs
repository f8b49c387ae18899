// config.rs - Scene configuration loaded from JSON
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Locomotion tuning for the controllable character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Per-axis damping coefficients (lateral, vertical, forward); must be negative
    pub deceleration: [f32; 3],
    /// Forward speed gained per second while forward/backward is held
    pub forward_acceleration: f32,
    /// Turn speed in half-turns per second while left/right is held
    pub turn_rate: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            deceleration: [-0.0005, -0.0001, -5.0],
            forward_acceleration: 50.0,
            turn_rate: 0.25,
        }
    }
}

/// Local-space offsets of the third-person camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseConfig {
    pub eye_offset: [f32; 3],
    pub look_at_offset: [f32; 3],
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            eye_offset: [-15.0, 20.0, -30.0],
            look_at_offset: [0.0, 10.0, 50.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            aspect: 1920.0 / 1080.0,
            near: 1.0,
            far: 1000.0,
            position: [75.0, 20.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    pub bias: f32,
    pub map_size: u32,
    pub near: f32,
    pub far: f32,
    /// Half-extent of the orthographic shadow frustum
    pub extent: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            bias: -0.001,
            map_size: 2048,
            near: 1.0,
            far: 500.0,
            extent: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalLightConfig {
    pub color: u32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub cast_shadow: bool,
    pub shadow: ShadowConfig,
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            position: [100.0, 100.0, 100.0],
            target: [0.0, 0.0, 0.0],
            cast_shadow: true,
            shadow: ShadowConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientLightConfig {
    pub color: u32,
    pub intensity: f32,
}

impl Default for AmbientLightConfig {
    fn default() -> Self {
        Self {
            color: 0x404040,
            intensity: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyboxConfig {
    pub path: String,
    /// Cube faces in +x, -x, +y, -y, +z, -z order
    pub faces: [String; 6],
    /// Clear color used when the faces are not drawn
    pub fallback_color: u32,
}

impl Default for SkyboxConfig {
    fn default() -> Self {
        Self {
            path: "./resources/skyboxes/".to_string(),
            faces: ["posx.jpg", "negx.jpg", "posy.jpg", "negy.jpg", "posz.jpg", "negz.jpg"]
                .map(String::from),
            fallback_color: 0x87b5e0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub width: f32,
    pub depth: f32,
    pub color: u32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            depth: 100.0,
            color: 0xffffff,
        }
    }
}

/// Character model to load at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: String,
    pub base_model: String,
    pub animation: Option<String>,
    pub position: [f32; 3],
    pub scale: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "./resources/zombie/".to_string(),
            base_model: "zombie.glb".to_string(),
            animation: Some("walk.glb".to_string()),
            position: [-33.0, 0.0, 0.0],
            scale: 0.1,
        }
    }
}

/// Complete scene configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub locomotion: LocomotionConfig,
    pub chase: ChaseConfig,
    pub camera: CameraConfig,
    pub directional_light: DirectionalLightConfig,
    pub ambient_light: AmbientLightConfig,
    pub skybox: SkyboxConfig,
    pub ground: GroundConfig,
    pub model: ModelConfig,
}

impl SceneConfig {
    /// Loads a config file, falling back to defaults for any missing field
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parse scene config {}", path.display()))?;
        log::info!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let mut config: SceneConfig = serde_json::from_str(text)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// `MODEL_PATH` swaps the model directory without editing the config file
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("MODEL_PATH") {
            log::debug!("MODEL_PATH override: {}", path);
            self.model.path = path;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.locomotion.deceleration.iter().any(|&d| d >= 0.0) {
            bail!(
                "locomotion.deceleration must be negative on every axis, got {:?}",
                self.locomotion.deceleration
            );
        }
        if self.model.scale <= 0.0 {
            bail!("model.scale must be positive, got {}", self.model.scale);
        }
        let camera = &self.camera;
        if camera.near <= 0.0 || camera.far <= camera.near {
            bail!("camera clip planes invalid: near {} far {}", camera.near, camera.far);
        }
        if camera.aspect <= 0.0 {
            bail!("camera.aspect must be positive, got {}", camera.aspect);
        }
        if camera.fov_degrees <= 0.0 || camera.fov_degrees >= 180.0 {
            bail!("camera.fov_degrees out of range: {}", camera.fov_degrees);
        }
        Ok(())
    }
}
