use clap::Args;

use panefit_core::{Result, WindowManager};

/// Arguments for the `get` subcommand.
#[derive(Args)]
pub struct GetArgs {
    /// Process id owning the window
    pid: u32,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn execute(args: &GetArgs) -> Result<()> {
    let geometry = panefit_windows::with_service(|service| service.window_geometry(args.pid))?;

    if args.json {
        if !super::print_json(serde_json::to_string_pretty(&geometry)) {
            std::process::exit(1);
        }
    } else {
        println!(
            "Current window: {}x{} at position ({}, {})",
            geometry.width, geometry.height, geometry.x, geometry.y
        );
    }
    Ok(())
}
