use chase_scene::app::App;
use chase_scene::config::SceneConfig;
use chase_scene::core::{Button, Controller};
use chase_scene::frame::FixedStepFrames;
use chase_scene::headless;
use glam::Vec3;
use std::path::PathBuf;

/// One-clip glTF: a single node translated over one second
const WALK_GLTF: &str = r#"{
    "asset": { "version": "2.0" },
    "nodes": [{ "name": "hips" }],
    "buffers": [{
        "byteLength": 32,
        "uri": "data:application/octet-stream;base64,AAAAAAAAgD8AAAAAAAAAAAAAAAAAAIA/AAAAAAAAAAA="
    }],
    "bufferViews": [
        { "buffer": 0, "byteOffset": 0, "byteLength": 8 },
        { "buffer": 0, "byteOffset": 8, "byteLength": 24 }
    ],
    "accessors": [
        { "bufferView": 0, "componentType": 5126, "count": 2, "type": "SCALAR", "min": [0.0], "max": [1.0] },
        { "bufferView": 1, "componentType": 5126, "count": 2, "type": "VEC3" }
    ],
    "animations": [{
        "name": "walk",
        "channels": [{ "sampler": 0, "target": { "node": 0, "path": "translation" } }],
        "samplers": [{ "input": 0, "output": 1, "interpolation": "LINEAR" }]
    }]
}"#;

fn asset_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chase-scene-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("walk.gltf"), WALK_GLTF).unwrap();
    dir
}

fn config_with_assets(dir: &PathBuf, base_model: &str) -> SceneConfig {
    let mut config = SceneConfig::default();
    config.model.path = dir.to_string_lossy().into_owned();
    config.model.base_model = base_model.to_string();
    config.model.animation = Some("walk.gltf".to_string());
    config
}

fn config_with_missing_model() -> SceneConfig {
    let mut config = SceneConfig::default();
    config.model.path = "./definitely/not/here/".to_string();
    config
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_failed_load_leaves_scene_running() {
        let mut app = App::new(config_with_missing_model());
        app.start_loading();
        app.finish_loading();

        assert!(!app.is_loading());
        assert!(app.target_transform().is_none());
        assert!(app.mixers().is_empty());

        let camera = *app.camera();
        app.controller_mut().apply(Button::KeyW, true);
        for _ in 0..10 {
            app.step(1.0 / 60.0);
        }
        assert_eq!(*app.camera(), camera);
    }

    #[test]
    fn test_animation_without_model_gets_no_mixer() {
        let dir = asset_dir("no-model");
        let mut app = App::new(config_with_assets(&dir, "missing.glb"));
        app.start_loading();
        app.finish_loading();

        assert!(app.target_transform().is_none());
        assert!(app.mixers().is_empty());
        assert!(!app.is_loading());
    }

    #[test]
    fn test_animation_binds_to_loaded_model() {
        let dir = asset_dir("with-model");
        let mut app = App::new(config_with_assets(&dir, "walk.gltf"));
        app.start_loading();
        app.finish_loading();

        assert!(app.target_transform().is_some());
        assert_eq!(app.mixers().len(), 1);
        let action = &app.mixers()[0].actions()[0];
        assert!(action.is_playing());
        assert_eq!(action.clip().duration, 1.0);
    }

    #[test]
    fn test_polled_animation_without_model_gets_no_mixer() {
        let dir = asset_dir("polled");
        let mut app = App::new(config_with_assets(&dir, "missing.glb"));
        app.start_loading();

        for _ in 0..1000 {
            if !app.is_loading() {
                break;
            }
            app.step(0.0);
            std::thread::sleep(std::time::Duration::from_millis(1));
        }

        assert!(!app.is_loading());
        assert!(app.mixers().is_empty());
    }

    #[test]
    fn test_polling_resolves_failed_load_eventually() {
        let mut app = App::new(config_with_missing_model());
        app.start_loading();

        for _ in 0..1000 {
            if !app.is_loading() {
                break;
            }
            app.step(0.0);
            std::thread::sleep(std::time::Duration::from_millis(1));
        }

        assert!(!app.is_loading());
        assert!(app.target_transform().is_none());
    }

    #[test]
    fn test_held_forward_moves_target_and_camera_follows() {
        let mut app = App::new(SceneConfig::default());
        app.use_placeholder();
        let start = app.target_transform().unwrap().position;

        let report = headless::run(&mut app, FixedStepFrames::new(1.0 / 60.0, Some(120)), &[Button::KeyW]);

        let target = report.target.unwrap();
        assert_eq!(report.frames, 120);
        assert!(target.position.z > start.z);
        assert!((target.position.x - start.x).abs() < 1e-4);
        assert!(report
            .camera_position
            .abs_diff_eq(target.position + Vec3::new(-15.0, 20.0, -30.0), 1e-3));
        assert!(report
            .camera_target
            .abs_diff_eq(target.position + Vec3::new(0.0, 10.0, 50.0), 1e-3));
    }

    #[test]
    fn test_keys_released_between_runs() {
        let mut app = App::new(SceneConfig::default());
        app.use_placeholder();
        headless::run(&mut app, FixedStepFrames::new(0.1, Some(3)), &[Button::KeyA]);

        assert!(!app.controller().is_down(Button::KeyA));
        assert!(!app.input_state().left);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut app = App::new(SceneConfig::default());
        app.resize(800, 400);
        assert!((app.camera().aspect - 2.0).abs() < 1e-6);
        app.resize(0, 400);
        assert!((app.camera().aspect - 2.0).abs() < 1e-6);
    }
}
