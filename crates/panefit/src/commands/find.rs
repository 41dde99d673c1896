use clap::Args;

use panefit_core::{Result, WindowManager};

/// Arguments for the `find` subcommand.
#[derive(Args)]
pub struct FindArgs {
    /// Process id owning the window
    pid: u32,
}

pub fn execute(args: &FindArgs) -> Result<()> {
    let handle = panefit_windows::with_service(|service| service.find_window_handle(args.pid))?;
    println!("{handle}");
    Ok(())
}
