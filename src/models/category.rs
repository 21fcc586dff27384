use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::converter::error::ConversionError;
use crate::converter::temperature::TemperatureScale;

/// Unit categories offered by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Time,
    Speed,
    Energy,
    /// Runtime-extensible category populated by user-registered unit pairs
    Custom,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 7] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Time,
        Category::Speed,
        Category::Energy,
        Category::Custom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
            Category::Speed => "Speed",
            Category::Energy => "Energy",
            Category::Custom => "Custom",
        }
    }

    /// Whether conversions in this category are a pure ratio of factors
    pub fn is_linear(self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category names are matched case-insensitively ("length" selects Length)
impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConversionError::UnknownCategory(trimmed.to_string()))
    }
}

/// How a single unit converts relative to the rest of its category
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionDescriptor {
    /// `value_in_base * factor = value_in_this_unit`
    Factor(f64),
    /// Temperature scales are affine and cannot share a multiplicative factor
    Temperature(TemperatureScale),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["Length", "Weight", "Temperature", "Time", "Speed", "Energy", "Custom"]
        );
    }

    #[test]
    fn test_parse_category_case_insensitive() {
        assert_eq!("Length".parse::<Category>().unwrap(), Category::Length);
        assert_eq!("energy".parse::<Category>().unwrap(), Category::Energy);
        assert_eq!("  CUSTOM ".parse::<Category>().unwrap(), Category::Custom);
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "Volume".parse::<Category>().unwrap_err();
        assert_eq!(err, ConversionError::UnknownCategory("Volume".to_string()));
        assert!(err.to_string().contains("Unknown category"));
    }

    #[test]
    fn test_only_temperature_is_affine() {
        for category in Category::ALL {
            assert_eq!(category.is_linear(), category != Category::Temperature);
        }
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Category::Speed.to_string(), "Speed");
    }
}
