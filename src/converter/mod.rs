//! Conversion core: the built-in unit table, temperature formulas, and the
//! per-session [`UnitRegistry`] that adds the Custom category on top.
//!
//! # Error Handling Strategy
//!
//! Everything here returns [`ConversionResult`] with a typed
//! [`ConversionError`], so a presentation layer can match on the failure and
//! show a message. Conversions are pure; the only mutation is custom-unit
//! registration, which validates all input before touching the table.

pub mod error;
pub mod registry;
pub mod table;
pub mod temperature;

pub use error::{ConversionError, ConversionResult};
pub use registry::{CustomUnit, UnitRegistry};
pub use temperature::{TemperatureScale, convert_temperature};
