//=========================================================================
// Game Configuration
//=========================================================================
//
// TOML-backed configuration for the game loop, scene loading and logging.
//
// Every field has a default, so an empty file (or no file at all) yields
// a runnable configuration.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::settings::Settings;

//=== Defaults ============================================================

/// File extension appended to scene paths by `load_scene_from_file`.
pub const DEFAULT_SCENE_FILE_EXTENSION: &str = ".scene.json";

/// Default screen width in terminal cells.
pub const DEFAULT_SCREEN_WIDTH: u32 = 80;

/// Default screen height in terminal cells.
pub const DEFAULT_SCREEN_HEIGHT: u32 = 25;

//=== ConfigError =========================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

//=== LoggingConfig =======================================================

/// Log sink configuration.
///
/// The terminal is the render surface, so logs go to a file by default.
/// Setting `file` to `None` sends them to stderr instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive understood by `env_logger` (e.g. `"info"`, `"aetheric_console=debug"`).
    pub level: String,

    /// Destination file, created along with its parent directories.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some(PathBuf::from("logs/debug.log")),
        }
    }
}

//=== GameConfig ==========================================================

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target ticks per second of the game loop.
    pub tps: f64,

    /// Capacity of the input event channel.
    pub input_channel_capacity: usize,

    /// Extension appended to scene file paths.
    pub scene_file_extension: String,

    /// Maximum scene history depth, unbounded when `None`.
    pub history_limit: Option<usize>,

    /// Frames a held key may go unreported before it is released, for
    /// terminals that never send key-up. `None` waits for key-up.
    pub input_hold_timeout: Option<u32>,

    pub screen_width: u32,
    pub screen_height: u32,

    pub logging: LoggingConfig,

    /// Settings injected into the scene manager at startup.
    pub settings: Settings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tps: 60.0,
            input_channel_capacity: 128,
            scene_file_extension: DEFAULT_SCENE_FILE_EXTENSION.to_string(),
            history_limit: None,
            input_hold_timeout: None,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            logging: LoggingConfig::default(),
            settings: Settings::default(),
        }
    }
}

impl GameConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

//=========================================================================
// Tests
//=========================================================================
