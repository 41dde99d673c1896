use panefit_core::config;
use panefit_core::{Error, Result};

/// Creates the default configuration file at `~/.config/panefit/`.
///
/// Generates `config.toml` with comments explaining every option. An
/// existing file is not overwritten.
pub fn execute() -> Result<()> {
    let Some(path) = config::config_path() else {
        return Err(Error::Config {
            path: "~/.config/panefit".into(),
            message: "could not determine home directory".into(),
        });
    };

    if path.exists() {
        println!("Already exists: {}", path.display());
        return Ok(());
    }

    let io_error = |e: std::io::Error| Error::Config {
        path: path.clone(),
        message: e.to_string(),
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_error)?;
    }
    std::fs::write(&path, config::template::generate_config()).map_err(io_error)?;

    println!("Created {}", path.display());
    println!("\nEdit this file to change logging, input limits, and size presets.");
    Ok(())
}
