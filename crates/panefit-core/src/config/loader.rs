use std::io;
use std::path::PathBuf;

use super::Config;
use crate::{Error, Result};

/// Returns the config directory: `~/.config/panefit/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("panefit"))
}

/// Returns the config file path: `~/.config/panefit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn try_load() -> Result<Option<Config>> {
    let path = config_path().ok_or_else(|| Error::Config {
        path: PathBuf::from("~/.config/panefit/config.toml"),
        message: "could not determine home directory".into(),
    })?;

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::Config {
                path,
                message: e.to_string(),
            });
        }
    };

    parse(&content)
        .map(Some)
        .map_err(|message| Error::Config { path, message })
}

/// Parses config text and validates it.
pub(crate) fn parse(content: &str) -> std::result::Result<Config, String> {
    let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
    config.validate();
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently yields defaults; other errors are reported
/// on stderr since logging is not set up yet at this point.
pub fn load() -> Config {
    match try_load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}
