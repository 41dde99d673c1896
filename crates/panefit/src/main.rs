mod commands;

use clap::{Parser, Subcommand};

use panefit_core::config;

#[derive(Parser)]
#[command(
    name = "panefit",
    version,
    about = "Find application windows by process and resize or move them"
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List application processes that own a visible window
    List(commands::list::ListArgs),
    /// Show the position and size of a process's window
    Get(commands::get::GetArgs),
    /// Resize a process's window, keeping its position
    Size(commands::size::SizeArgs),
    /// Move and resize a process's window
    Move(commands::move_window::MoveArgs),
    /// Print the handle of the window that would be controlled for a process
    Find(commands::find::FindArgs),
    /// Apply a named size preset to a process's window
    Preset(commands::preset::PresetArgs),
    /// List the configured size presets
    Presets,
}

fn main() {
    let cli = Cli::parse();

    let config = config::load();
    panefit_core::log::init(&config.log, cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List(args) => commands::list::execute(&args),
        Commands::Get(args) => commands::get::execute(&args),
        Commands::Size(args) => commands::size::execute(&args, &config),
        Commands::Move(args) => commands::move_window::execute(&args, &config),
        Commands::Find(args) => commands::find::execute(&args),
        Commands::Preset(args) => commands::preset::execute(&args, &config),
        Commands::Presets => commands::preset::list(&config),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
