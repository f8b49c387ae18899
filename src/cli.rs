// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::core::Button;

#[derive(Parser, Debug, Clone)]
#[command(name = "chase-scene")]
#[command(about = "Third-person chase camera scene", long_about = None)]
pub struct Cli {
    /// Scene configuration JSON; built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Step the scene without opening a window and print the final state
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Number of frames to step in headless mode
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Seconds per headless frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Keys held down for the whole headless run, e.g. `--hold w,a`
    #[arg(long, value_delimiter = ',')]
    pub hold: Vec<String>,

    /// Use a box stand-in instead of loading the model files
    #[arg(long, default_value = "false")]
    pub placeholder: bool,
}

impl Cli {
    /// Movement keys named by `--hold`; unknown names are skipped
    pub fn held_buttons(&self) -> Vec<Button> {
        self.hold
            .iter()
            .filter_map(|name| {
                let button = Button::from_key_name(name);
                if button.is_none() {
                    log::warn!("Ignoring unknown key '{}'", name);
                }
                button
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["chase-scene"]);
        assert!(cli.config.is_none());
        assert!(!cli.headless);
        assert_eq!(cli.frames, 600);
        assert!(cli.held_buttons().is_empty());
    }

    #[test]
    fn hold_list_is_split_and_filtered() {
        let cli = Cli::parse_from(["chase-scene", "--headless", "--hold", "w,a,x"]);
        assert!(cli.headless);
        assert_eq!(cli.held_buttons(), vec![Button::KeyW, Button::KeyA]);
    }
}
