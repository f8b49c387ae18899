pub mod asset_loader;
pub mod gltf;

pub use asset_loader::{AssetLoader, PendingAsset};
pub use gltf::{load_animation_clips, load_model, MeshPart, ModelData};
