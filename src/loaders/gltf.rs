use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use std::path::Path;

use crate::animation::AnimationClip;
use crate::math::AABB;

/// One mesh primitive reduced to its bounds and base color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshPart {
    pub bounds: AABB,
    pub color: [f32; 3],
}

/// Geometry of a loaded model, in model space
#[derive(Debug, Clone, PartialEq)]
pub struct ModelData {
    pub name: String,
    pub parts: Vec<MeshPart>,
}

impl ModelData {
    /// Humanoid-sized box, in the same centimetre-ish units as character assets
    pub fn placeholder() -> Self {
        Self {
            name: "placeholder".to_string(),
            parts: vec![MeshPart {
                bounds: AABB::new(Vec3::new(-25.0, 0.0, -10.0), Vec3::new(25.0, 180.0, 10.0)),
                color: [0.55, 0.65, 0.45],
            }],
        }
    }

    /// Bounds of every part together
    pub fn bounds(&self) -> Option<AABB> {
        self.parts
            .iter()
            .map(|part| part.bounds)
            .reduce(|acc, b| acc.union(&b))
    }
}

/// Loads a glTF/GLB model and reduces each primitive to a box
pub fn load_model(path: impl AsRef<Path>) -> Result<ModelData> {
    let path = path.as_ref();
    log::info!("Loading model: {}", path.display());

    let (gltf, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {}", path.display()))?;

    log::debug!(
        "glTF loaded: {} scenes, {} nodes, {} meshes, {} animations",
        gltf.scenes().count(),
        gltf.nodes().count(),
        gltf.meshes().count(),
        gltf.animations().count()
    );

    let mut parts = Vec::new();
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &buffers, &Mat4::IDENTITY, &mut parts)?;
        }
    }

    if parts.is_empty() {
        log::warn!("No geometry found in {}", path.display());
    }

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_string());

    log::info!("Extracted {} mesh parts from {}", parts.len(), name);
    Ok(ModelData { name, parts })
}

/// Loads every animation in a glTF/GLB file as a clip
pub fn load_animation_clips(path: impl AsRef<Path>) -> Result<Vec<AnimationClip>> {
    let path = path.as_ref();
    log::info!("Loading animations: {}", path.display());

    let (gltf, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {}", path.display()))?;

    let clips: Vec<AnimationClip> = gltf
        .animations()
        .map(|animation| {
            let name = animation.name().unwrap_or("unnamed").to_string();
            AnimationClip::new(name, animation_duration(&animation, &buffers))
        })
        .collect();

    if clips.is_empty() {
        log::warn!("No animations in {}", path.display());
    }
    Ok(clips)
}

/// Recursively processes glTF nodes
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    parts: &mut Vec<MeshPart>,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        process_mesh(&mesh, buffers, &global_transform, parts)?;
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, parts)?;
    }

    Ok(())
}

fn process_mesh(
    mesh: &gltf::Mesh,
    buffers: &[gltf::buffer::Data],
    transform: &Mat4,
    parts: &mut Vec<MeshPart>,
) -> Result<()> {
    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let positions = reader
            .read_positions()
            .with_context(|| format!("Mesh {:?} primitive has no positions", mesh.name()))?;

        let vertices: Vec<Vec3> = positions
            .map(|pos| transform.transform_point3(Vec3::from_array(pos)))
            .collect();

        let Some(bounds) = AABB::from_points(&vertices) else {
            continue;
        };

        let base = primitive.material().pbr_metallic_roughness().base_color_factor();
        parts.push(MeshPart {
            bounds,
            color: [base[0], base[1], base[2]],
        });
    }

    Ok(())
}

/// Latest keyframe time across all channels
fn animation_duration(animation: &gltf::Animation, buffers: &[gltf::buffer::Data]) -> f32 {
    let mut max_time = 0.0f32;

    for channel in animation.channels() {
        let reader = channel.reader(|buffer| Some(&buffers[buffer.index()]));

        if let Some(inputs) = reader.read_inputs() {
            for time in inputs {
                max_time = max_time.max(time);
            }
        }
    }

    max_time
}
