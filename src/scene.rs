use glam::{Mat4, Quat, Vec3};
use std::path::PathBuf;

use crate::config::{AmbientLightConfig, DirectionalLightConfig, GroundConfig, SceneConfig, ShadowConfig, SkyboxConfig};
use crate::loaders::{MeshPart, ModelData};
use crate::math::{hex_to_rgb, scaled, Transform};
use crate::types::InstanceData;

/// Thickness given to the ground plane when drawn as a box
const GROUND_THICKNESS: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub position: Vec3,
    pub target: Vec3,
    pub cast_shadow: bool,
    pub shadow: ShadowConfig,
}

impl DirectionalLight {
    /// Unit vector pointing from the target towards the light
    pub fn direction(&self) -> Vec3 {
        (self.position - self.target).normalize_or_zero()
    }
}

impl From<&DirectionalLightConfig> for DirectionalLight {
    fn from(config: &DirectionalLightConfig) -> Self {
        Self {
            color: hex_to_rgb(config.color),
            position: Vec3::from_array(config.position),
            target: Vec3::from_array(config.target),
            cast_shadow: config.cast_shadow,
            shadow: config.shadow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl AmbientLight {
    pub fn radiance(&self) -> [f32; 3] {
        scaled(self.color, self.intensity)
    }
}

impl From<&AmbientLightConfig> for AmbientLight {
    fn from(config: &AmbientLightConfig) -> Self {
        Self {
            color: hex_to_rgb(config.color),
            intensity: config.intensity,
        }
    }
}

/// Cube-map background; the faces are resolved but drawing them is up to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Skybox {
    pub faces: [PathBuf; 6],
    pub fallback_color: [f32; 3],
}

impl From<&SkyboxConfig> for Skybox {
    fn from(config: &SkyboxConfig) -> Self {
        let base = PathBuf::from(&config.path);
        Self {
            faces: config.faces.clone().map(|face| base.join(face)),
            fallback_color: hex_to_rgb(config.fallback_color),
        }
    }
}

/// Flat plane in XZ at y = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    pub width: f32,
    pub depth: f32,
    pub color: [f32; 3],
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Ground {
    pub fn instance(&self) -> InstanceData {
        let model = Mat4::from_scale_rotation_translation(
            Vec3::new(self.width, GROUND_THICKNESS, self.depth),
            Quat::IDENTITY,
            Vec3::new(0.0, -GROUND_THICKNESS * 0.5, 0.0),
        );
        InstanceData::new(model, self.color)
    }
}

impl From<&GroundConfig> for Ground {
    fn from(config: &GroundConfig) -> Self {
        Self {
            width: config.width,
            depth: config.depth,
            color: hex_to_rgb(config.color),
            cast_shadow: false,
            receive_shadow: true,
        }
    }
}

/// A loaded model placed in the world
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub name: String,
    pub transform: Transform,
    pub parts: Vec<MeshPart>,
    pub cast_shadow: bool,
}

impl Entity {
    pub fn from_model(model: ModelData, transform: Transform) -> Self {
        Self {
            name: model.name,
            transform,
            parts: model.parts,
            cast_shadow: true,
        }
    }

    /// One box per mesh part, in world space
    pub fn instances(&self) -> impl Iterator<Item = InstanceData> + '_ {
        let world = self.transform.matrix();
        self.parts.iter().map(move |part| {
            let local = Mat4::from_scale_rotation_translation(
                part.bounds.size(),
                Quat::IDENTITY,
                part.bounds.center(),
            );
            InstanceData::new(world * local, part.color)
        })
    }
}

/// Everything drawn each frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub directional_light: DirectionalLight,
    pub ambient_light: AmbientLight,
    pub skybox: Skybox,
    pub ground: Ground,
    pub entities: Vec<Entity>,
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            directional_light: DirectionalLight::from(&config.directional_light),
            ambient_light: AmbientLight::from(&config.ambient_light),
            skybox: Skybox::from(&config.skybox),
            ground: Ground::from(&config.ground),
            entities: Vec::new(),
        }
    }

    /// Adds an entity and returns its index
    pub fn add(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub fn entity(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    pub fn entity_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index)
    }

    /// Ground first, then every entity part
    pub fn instances(&self) -> Vec<InstanceData> {
        std::iter::once(self.ground.instance())
            .chain(self.entities.iter().flat_map(|entity| entity.instances()))
            .collect()
    }
}
