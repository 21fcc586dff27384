use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "UNIT_CONVERTER_CONFIG_DIR";

const APP_DIR_NAME: &str = "unit-converter";

/// Get the configuration directory.
///
/// `$UNIT_CONVERTER_CONFIG_DIR` wins when set and non-empty; otherwise the
/// platform config directory is used (`~/.config/unit-converter` on Linux).
pub fn get_config_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(base.join(APP_DIR_NAME))
}
