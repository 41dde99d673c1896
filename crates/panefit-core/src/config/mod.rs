mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::WindowGeometry;
use crate::log::LogConfig;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration.
///
/// Loaded from `~/.config/panefit/config.toml`. Missing sections fall
/// back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    /// Bounds applied to sizes and positions given on the command line.
    pub limits: InputLimits,
    /// Named sizes for `panefit preset`.
    #[serde(rename = "preset")]
    pub presets: Vec<SizePreset>,
}

/// Accepted ranges for user-supplied geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub min_width: i32,
    pub max_width: i32,
    pub min_height: i32,
    pub max_height: i32,
    pub min_position: i32,
    pub max_position: i32,
}

/// A named window size, optionally with a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePreset {
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            limits: InputLimits::default(),
            presets: default_presets(),
        }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_width: 100,
            max_width: 3840,
            min_height: 100,
            max_height: 2160,
            min_position: 0,
            max_position: 5000,
        }
    }
}

/// Returns the built-in presets.
pub fn default_presets() -> Vec<SizePreset> {
    vec![
        SizePreset::size("HD", 1280, 720),
        SizePreset::size("FHD", 1920, 1080),
        SizePreset::size("Square", 800, 800),
        SizePreset::size("Small", 640, 480),
        SizePreset::size("Wide", 1200, 600),
        SizePreset {
            x: Some(30),
            y: Some(30),
            ..SizePreset::size("Custom 1", 1860, 1000)
        },
    ]
}

impl SizePreset {
    fn size(name: &str, width: i32, height: i32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            x: None,
            y: None,
        }
    }

    /// Returns the full geometry when the preset also fixes a position.
    pub fn geometry(&self) -> Option<WindowGeometry> {
        Some(WindowGeometry::new(self.x?, self.y?, self.width, self.height))
    }
}

impl InputLimits {
    pub fn clamp_width(&self, width: i32) -> i32 {
        width.clamp(self.min_width, self.max_width)
    }

    pub fn clamp_height(&self, height: i32) -> i32 {
        height.clamp(self.min_height, self.max_height)
    }

    pub fn clamp_position(&self, value: i32) -> i32 {
        value.clamp(self.min_position, self.max_position)
    }

    /// Clamps every field of `geometry` into range.
    pub fn clamp(&self, geometry: WindowGeometry) -> WindowGeometry {
        WindowGeometry::new(
            self.clamp_position(geometry.x),
            self.clamp_position(geometry.y),
            self.clamp_width(geometry.width),
            self.clamp_height(geometry.height),
        )
    }

    /// Swaps inverted bounds so every `min <= max`.
    fn normalize(&mut self) {
        fn order(min: &mut i32, max: &mut i32) {
            if *min > *max {
                std::mem::swap(min, max);
            }
        }
        order(&mut self.min_width, &mut self.max_width);
        order(&mut self.min_height, &mut self.max_height);
        order(&mut self.min_position, &mut self.max_position);
    }
}

impl Config {
    /// Repairs inverted limits and clamps presets into range.
    ///
    /// Presets with an empty name are dropped.
    pub fn validate(&mut self) {
        self.limits.normalize();
        let limits = self.limits;

        self.presets.retain(|p| !p.name.trim().is_empty());
        for preset in &mut self.presets {
            preset.width = limits.clamp_width(preset.width);
            preset.height = limits.clamp_height(preset.height);
            preset.x = preset.x.map(|x| limits.clamp_position(x));
            preset.y = preset.y.map(|y| limits.clamp_position(y));
        }
    }

    /// Finds a preset by name, ignoring case.
    pub fn preset(&self, name: &str) -> Option<&SizePreset> {
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}
