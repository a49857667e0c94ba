// Game configuration

use super::characters::{CharacterStats, DEFAULT_FRAME_RATE};
use crate::engine::input::InputConfig;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the asset directory
pub const ASSET_DIR_VAR: &str = "BOMBR_ASSETS";

/// Everything the game needs to start
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub title: String,
    /// Window size in logical pixels
    pub window_width: u32,
    pub window_height: u32,
    /// sRGB background colour, components in 0.0 - 1.0
    pub clear_color: [f64; 3],

    /// Directory holding the sheet surface and its descriptor
    pub asset_dir: PathBuf,
    pub sheet_file: String,
    pub descriptor_file: String,
    /// Width of one sheet frame in pixels
    pub frame_width: u32,
    /// Seconds per animation frame
    pub frame_rate: f32,
    /// Scale applied to background tiles
    pub tile_scale: f32,

    pub character: CharacterStats,
    pub input: InputConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "bombr".to_string(),
            window_width: 960,
            window_height: 896,
            // yellow-green
            clear_color: [154.0 / 255.0, 205.0 / 255.0, 50.0 / 255.0],
            asset_dir: PathBuf::from("assets"),
            sheet_file: "bombr-sprite-0001.png".to_string(),
            descriptor_file: "sheet.csv".to_string(),
            frame_width: 32,
            frame_rate: DEFAULT_FRAME_RATE,
            tile_scale: 2.0,
            character: CharacterStats::default(),
            input: InputConfig::default(),
        }
    }
}

impl GameConfig {
    /// Defaults, with the asset directory taken from `BOMBR_ASSETS` when set
    pub fn from_env() -> Self {
        let config = Self::default();
        match env::var_os(ASSET_DIR_VAR) {
            Some(dir) if !dir.is_empty() => config.with_asset_dir(dir),
            _ => config,
        }
    }

    pub fn with_asset_dir<P: Into<PathBuf>>(mut self, asset_dir: P) -> Self {
        self.asset_dir = asset_dir.into();
        self
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }
}
