use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConversionError;

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// The closed set of temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] =
        [TemperatureScale::Celsius, TemperatureScale::Fahrenheit, TemperatureScale::Kelvin];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
            TemperatureScale::Kelvin => "Kelvin",
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit names match exactly, like every other unit in the table
impl FromStr for TemperatureScale {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemperatureScale::ALL
            .into_iter()
            .find(|scale| scale.name() == s)
            .ok_or_else(|| ConversionError::UnsupportedUnit(s.to_string()))
    }
}

/// Convert between temperature scales.
///
/// Each ordered pair has its own formula so that results match the
/// reference table exactly (no round trip through a base scale).
pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    use TemperatureScale::*;

    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Celsius, Celsius) => value,
        (Fahrenheit, Celsius) => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Fahrenheit, Fahrenheit) => value,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + FAHRENHEIT_OFFSET,
        (Kelvin, Kelvin) => value,
    }
}
