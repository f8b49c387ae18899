use anyhow::Result;
use clap::Parser;

use chase_scene::app::App;
use chase_scene::cli::Cli;
use chase_scene::config::SceneConfig;
use chase_scene::frame::FixedStepFrames;
use chase_scene::{headless, window};

fn load_config(cli: &Cli) -> Result<SceneConfig> {
    match &cli.config {
        Some(path) => SceneConfig::load(path),
        None => {
            let mut config = SceneConfig::default();
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut app = App::new(config);
    if cli.placeholder {
        app.use_placeholder();
    } else {
        app.start_loading();
    }

    if cli.headless {
        app.finish_loading();
        let frames = FixedStepFrames::new(cli.dt, Some(cli.frames));
        let report = headless::run(&mut app, frames, &cli.held_buttons());
        println!("{}", report);
        return Ok(());
    }

    window::run(app)
}
