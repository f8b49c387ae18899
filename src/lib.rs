pub mod animation;
pub mod app;
pub mod camera;
pub mod chase_camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod headless;
pub mod loaders;
pub mod locomotion;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod types;
pub mod window;

pub use app::App;
pub use chase_camera::{CameraOffsets, ChaseCamera};
pub use config::SceneConfig;
pub use locomotion::LocomotionModel;
