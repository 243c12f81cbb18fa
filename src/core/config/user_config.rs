//! User configuration file handling
//!
//! Manages settings from ~/.config/showcoords/settings.json

use anyhow::{Context, Result};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration from ~/.config/showcoords/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Polling period while the cursor moves, in milliseconds
    pub fast_ms: Option<u64>,
    /// Polling period while the cursor is idle, in milliseconds
    pub slow_ms: Option<u64>,
    /// Label font size in logical pixels
    pub font_size: Option<f32>,
    /// Label colour as a hex string, e.g. "#ffffff" or "ffcc00"
    pub text_color: Option<String>,
}

impl ConfigFile {
    /// Get the path to the showcoords config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("showcoords")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file is `Ok(None)`. Read and parse failures are returned so
    /// the caller can report them once logging is up.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(Some(config))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Parsed text colour, `Ok(None)` when none is set
    pub fn parsed_text_color(&self) -> Result<Option<Color>, String> {
        let Some(raw) = self.text_color.as_deref() else {
            return Ok(None);
        };
        Srgba::hex(raw)
            .map(|color| Some(color.into()))
            .map_err(|e| format!("Ignoring invalid text_color '{raw}': {e}"))
    }

    /// Settings file contents written by `--new-config`
    pub fn with_defaults() -> Self {
        use super::settings::{DEFAULT_FONT_SIZE, FAST_MS, SLOW_MS};
        Self {
            fast_ms: Some(FAST_MS),
            slow_ms: Some(SLOW_MS),
            font_size: Some(DEFAULT_FONT_SIZE),
            text_color: Some("#ffffff".to_string()),
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/showcoords directory and its logs/ folder
    /// 2. A settings.json file with default values, unless one exists
    pub fn initialize_config_directory() -> Result<()> {
        Self::initialize_in(&Self::config_dir())
    }

    pub fn initialize_in(config_dir: &Path) -> Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        if !settings_path.exists() {
            Self::with_defaults().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}
