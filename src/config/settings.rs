//! User settings stored as settings.json in the config directory

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::history::{DEFAULT_DISPLAY_COUNT, DEFAULT_HISTORY_CAPACITY};
use crate::models::Category;
use crate::utils::get_config_dir;

pub const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Entries retained by the history log
    pub history_capacity: usize,
    /// Entries shown by `history` without an argument
    pub history_display: usize,
    /// Decimals for displayed values (None = shortest round-trip form)
    pub precision: Option<usize>,
    /// Category selected when the shell starts
    pub default_category: Category,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            history_display: DEFAULT_DISPLAY_COUNT,
            precision: None,
            default_category: Category::Length,
        }
    }
}

impl Settings {
    /// Load settings from an explicit file. Missing or malformed files are errors.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
        debug!(path = %path.display(), "Settings loaded");
        Ok(settings)
    }

    /// Load `settings.json` from a config directory, falling back to defaults
    pub fn load_or_default(config_dir: &Path) -> Self {
        let path = config_dir.join(SETTINGS_FILENAME);
        if !path.exists() {
            debug!(path = %path.display(), "No settings file found, using defaults");
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %format!("{:#}", e), "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve settings for a run: an explicit `--config` path is strict,
    /// the default location is lenient.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match get_config_dir() {
                Ok(dir) => Ok(Self::load_or_default(&dir)),
                Err(e) => {
                    warn!(error = %e, "No config directory available, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }
}
