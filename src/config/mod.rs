//! Runtime configuration.
//!
//! Settings are read once at startup from `settings.json`:
//!
//! - `--config <PATH>` if given (missing or malformed is an error)
//! - `$UNIT_CONVERTER_CONFIG_DIR/settings.json` if the variable is set
//! - the platform config directory otherwise
//!
//! A missing default file means defaults; a malformed one logs a warning and
//! also falls back to defaults. Nothing is ever written back.

pub mod settings;

pub use settings::{SETTINGS_FILENAME, Settings};
