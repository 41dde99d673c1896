use clap::Args;

use panefit_core::config::{Config, SizePreset};
use panefit_core::{Error, Result, WindowManager};

/// Arguments for the `preset` subcommand.
#[derive(Args)]
pub struct PresetArgs {
    /// Process id owning the window
    pid: u32,
    /// Preset name (case-insensitive), see `panefit presets`
    name: String,
}

/// Applies a preset: size only, or position and size when the preset
/// has coordinates.
pub fn execute(args: &PresetArgs, config: &Config) -> Result<()> {
    let Some(preset) = config.preset(&args.name) else {
        let known: Vec<&str> = config.presets.iter().map(|p| p.name.as_str()).collect();
        return Err(Error::Config {
            path: config_path_hint(),
            message: format!(
                "no preset named '{}' (available: {})",
                args.name,
                known.join(", ")
            ),
        });
    };

    panefit_windows::with_service(|service| match preset.geometry() {
        Some(g) => service.set_window_position(args.pid, g.x, g.y, g.width, g.height),
        None => service.set_window_size(args.pid, preset.width, preset.height),
    })?;

    println!("Applied preset {} to PID {}: {}", preset.name, args.pid, describe(preset));
    Ok(())
}

/// Prints the configured presets.
pub fn list(config: &Config) -> Result<()> {
    if config.presets.is_empty() {
        println!("No presets configured.");
        return Ok(());
    }
    for preset in &config.presets {
        println!("{:<12} {}", preset.name, describe(preset));
    }
    Ok(())
}

fn describe(preset: &SizePreset) -> String {
    match preset.geometry() {
        Some(g) => format!("{}x{} at ({}, {})", g.width, g.height, g.x, g.y),
        None => format!("{}x{}", preset.width, preset.height),
    }
}

fn config_path_hint() -> std::path::PathBuf {
    panefit_core::config::config_path().unwrap_or_else(|| "config.toml".into())
}
