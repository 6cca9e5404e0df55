use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use paintbox::{
    backend,
    backend::wayland::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH},
    config::Config,
};

#[derive(Parser, Debug)]
#[command(name = "paintbox")]
#[command(version, about = "Minimal paint program for Wayland compositors")]
struct Cli {
    /// Load configuration from this file instead of ~/.config/paintbox/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_config: bool,
}

fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    match explicit {
        // A file the user named must load
        Some(path) => Config::load(Some(path)),
        None => match Config::load(None) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Failed to load config: {:#}. Using defaults.", e);
                Ok(Config::default())
            }
        },
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    // Check for Wayland environment
    if std::env::var_os("WAYLAND_DISPLAY").is_none() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor (Sway, Hyprland, GNOME, KDE, etc.).");
        return Err(anyhow::anyhow!(
            "Wayland environment required: WAYLAND_DISPLAY is not set"
        ));
    }

    log::info!(
        "Starting paintbox {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("PAINTBOX_GIT_HASH")
    );
    log::info!(
        "Opening \"{}\" ({}x{})",
        WINDOW_TITLE,
        WINDOW_WIDTH,
        WINDOW_HEIGHT
    );
    log::info!("Controls:");
    log::info!("  - Modes: F (free), L (line), C (circle)");
    log::info!("  - Colors: 1 (black), 2 (red), 3 (blue), 4 (green)");
    log::info!("  - Brush size: + or = to grow, - to shrink");
    log::info!("  - Exit: Escape or close the window");

    backend::run_wayland(config)?;

    log::info!("Paint program closed.");
    Ok(())
}
