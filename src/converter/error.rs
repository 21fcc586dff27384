use thiserror::Error;

use crate::models::Category;

/// Failures of a single conversion or custom-unit registration.
///
/// None of these are fatal: the caller reports them and the session continues
/// with its history and custom table untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error(
        "Unknown category: '{0}' (valid categories: Length, Weight, Temperature, Time, Speed, Energy, Custom)"
    )]
    UnknownCategory(String),

    #[error("Unknown unit '{unit}' in category {category}")]
    UnknownUnit { category: Category, unit: String },

    #[error("Unsupported temperature unit: '{0}' (expected Celsius, Fahrenheit or Kelvin)")]
    UnsupportedUnit(String),

    #[error("Invalid custom unit: {0}")]
    InvalidCustomUnitInput(String),

    #[error(
        "Cannot convert '{from}' to '{to}': they are defined relative to different base units ('{from_anchor}' and '{to_anchor}')"
    )]
    IncompatibleCustomUnits { from: String, to: String, from_anchor: String, to_anchor: String },

    #[error("Value must be a finite number, got {0}")]
    NonFiniteValue(f64),
}

pub type ConversionResult<T> = Result<T, ConversionError>;
