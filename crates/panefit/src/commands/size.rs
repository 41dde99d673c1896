use clap::Args;

use panefit_core::config::Config;
use panefit_core::{Result, WindowManager};

/// Arguments for the `size` subcommand.
#[derive(Args)]
pub struct SizeArgs {
    /// Process id owning the window
    pid: u32,
    /// Width in pixels
    width: i32,
    /// Height in pixels
    height: i32,
}

pub fn execute(args: &SizeArgs, config: &Config) -> Result<()> {
    let width = config.limits.clamp_width(args.width);
    let height = config.limits.clamp_height(args.height);
    if (width, height) != (args.width, args.height) {
        tracing::warn!(
            requested_width = args.width,
            requested_height = args.height,
            width,
            height,
            "size adjusted to configured limits"
        );
        eprintln!("Note: adjusted to {width}x{height} to stay within configured limits.");
    }

    panefit_windows::with_service(|service| service.set_window_size(args.pid, width, height))?;

    println!("Set window size to {width}x{height} for PID {}", args.pid);
    Ok(())
}
