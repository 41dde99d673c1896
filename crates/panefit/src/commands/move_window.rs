use clap::Args;

use panefit_core::config::Config;
use panefit_core::{Result, WindowGeometry, WindowManager};

/// Arguments for the `move` subcommand.
#[derive(Args)]
pub struct MoveArgs {
    /// Process id owning the window
    pid: u32,
    /// X position in pixels
    #[arg(long, allow_negative_numbers = true)]
    x: i32,
    /// Y position in pixels
    #[arg(long, allow_negative_numbers = true)]
    y: i32,
    /// Width in pixels
    #[arg(long)]
    width: i32,
    /// Height in pixels
    #[arg(long)]
    height: i32,
}

pub fn execute(args: &MoveArgs, config: &Config) -> Result<()> {
    let requested = WindowGeometry::new(args.x, args.y, args.width, args.height);
    let target = super::clamp_geometry(&config.limits, requested);

    panefit_windows::with_service(|service| {
        service.set_window_position(args.pid, target.x, target.y, target.width, target.height)
    })?;

    println!(
        "Set window position to ({}, {}) and size to {}x{} for PID {}",
        target.x, target.y, target.width, target.height, args.pid
    );
    Ok(())
}
