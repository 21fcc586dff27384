//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use unit_converter::{Category, Session, Settings};

/// Builder for a temporary config directory holding a settings.json
pub struct ConfigDirBuilder {
    temp_dir: TempDir,
}

impl ConfigDirBuilder {
    /// Create a new builder with an empty config directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the config directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of settings.json inside the directory (may not exist yet)
    pub fn settings_path(&self) -> PathBuf {
        self.temp_dir.path().join("settings.json")
    }

    /// Write raw content to settings.json
    pub fn with_settings_json(self, content: &str) -> Self {
        fs::write(self.settings_path(), content).expect("Failed to write settings.json");
        self
    }

    /// Serialize the given settings into settings.json
    pub fn with_settings(self, settings: &Settings) -> Self {
        let content = serde_json::to_string_pretty(settings).expect("Failed to serialize settings");
        self.with_settings_json(&content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ConfigDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the binary, isolated from the user's config and RUST_LOG
pub fn converter_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_unit-converter"));
    cmd.env("UNIT_CONVERTER_CONFIG_DIR", config_dir).env_remove("RUST_LOG");
    cmd
}

/// Session with `Inch = 2.54 Centimeter` registered
pub fn session_with_inches() -> Session {
    let mut session = Session::default();
    session.add_custom_unit("Inch", "Centimeter", 2.54).expect("Failed to add custom unit");
    session
}

/// Run `count` distinct Length conversions (values 1..=count)
pub fn record_conversions(session: &mut Session, count: usize) {
    for value in 1..=count {
        session
            .convert_and_record(Category::Length, value as f64, "Kilometers", "Meters")
            .expect("Conversion failed");
    }
}

/// Relative comparison for chained floating point results
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= scale * 1e-9
}
