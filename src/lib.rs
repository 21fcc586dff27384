//! Unit Converter - convert values between units within a category
//!
//! This library provides the conversion core behind the `unit-converter` binary:
//!
//! - Fixed-factor conversion for Length, Weight, Time, Speed and Energy
//! - Formula-based Temperature conversion between Celsius, Fahrenheit and Kelvin
//! - User-defined units in the Custom category, registered per session
//! - A bounded history of formatted conversions
//!
//! # Example
//!
//! ```
//! use unit_converter::{Category, Session};
//!
//! let mut session = Session::default();
//! let entry = session.convert_and_record(Category::Length, 1.0, "Kilometers", "Meters")?;
//! assert_eq!(entry.display, "1 Kilometers = 1000 Meters");
//!
//! session.add_custom_unit("Inch", "Centimeter", 2.54)?;
//! let cm = session.registry().convert(Category::Custom, 10.0, "Inch", "Centimeter")?;
//! assert_eq!(cm, 25.4);
//! # Ok::<(), unit_converter::ConversionError>(())
//! ```

pub mod cli;
pub mod config;
pub mod converter;
pub mod history;
pub mod models;
pub mod parsers;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use converter::{ConversionError, ConversionResult, TemperatureScale, UnitRegistry};
pub use history::HistoryLog;
pub use models::{Category, HistoryEntry};
pub use session::Session;
