//! Built-in unit table.
//!
//! Factors are relative to the first unit of each category (its base unit):
//! `value_in_base * factor = value_in_unit`.

use super::temperature::TemperatureScale;
use crate::models::Category;

const LENGTH_UNITS: &[(&str, f64)] = &[
    ("Meters", 1.0),
    ("Kilometers", 0.001),
    ("Feet", 3.28084),
    ("Miles", 0.000621371),
];

const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("Kilograms", 1.0),
    ("Grams", 1000.0),
    ("Pounds", 2.20462),
    ("Ounces", 35.274),
];

const TIME_UNITS: &[(&str, f64)] = &[
    ("Seconds", 1.0),
    ("Minutes", 1.0 / 60.0),
    ("Hours", 1.0 / 3600.0),
    ("Days", 1.0 / 86400.0),
];

const SPEED_UNITS: &[(&str, f64)] = &[
    ("Meters/Second", 1.0),
    ("Kilometers/Hour", 3.6),
    ("Miles/Hour", 2.23694),
    ("Feet/Second", 3.28084),
];

const ENERGY_UNITS: &[(&str, f64)] = &[
    ("Joules", 1.0),
    ("Kilojoules", 0.001),
    ("Calories", 0.239006),
    ("Kilocalories", 0.000239006),
];

/// Factor table of a built-in linear category.
///
/// Empty for Temperature (not linear) and Custom (owned by the registry).
pub fn linear_units(category: Category) -> &'static [(&'static str, f64)] {
    match category {
        Category::Length => LENGTH_UNITS,
        Category::Weight => WEIGHT_UNITS,
        Category::Time => TIME_UNITS,
        Category::Speed => SPEED_UNITS,
        Category::Energy => ENERGY_UNITS,
        Category::Temperature | Category::Custom => &[],
    }
}

/// Look up the factor of a built-in linear unit by exact name
pub fn linear_factor(category: Category, unit: &str) -> Option<f64> {
    linear_units(category).iter().find(|(name, _)| *name == unit).map(|(_, factor)| *factor)
}

/// Names of the built-in units of a category, in table order
pub fn builtin_unit_names(category: Category) -> Vec<&'static str> {
    match category {
        Category::Temperature => TemperatureScale::ALL.iter().map(|s| s.name()).collect(),
        _ => linear_units(category).iter().map(|(name, _)| *name).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_linear_category_has_a_base_unit() {
        for category in Category::ALL.into_iter().filter(|c| c.is_linear()) {
            if category == Category::Custom {
                continue;
            }
            let units = linear_units(category);
            assert_eq!(units.len(), 4, "{} should have 4 units", category);
            assert_eq!(units[0].1, 1.0, "{} base unit should have factor 1", category);
        }
    }

    #[test]
    fn test_factors_are_positive_and_finite() {
        for category in Category::ALL {
            for (name, factor) in linear_units(category) {
                assert!(factor.is_finite() && *factor > 0.0, "{} has bad factor", name);
            }
        }
    }

    #[test]
    fn test_linear_factor_lookup() {
        assert_eq!(linear_factor(Category::Length, "Kilometers"), Some(0.001));
        assert_eq!(linear_factor(Category::Weight, "Grams"), Some(1000.0));
        assert_eq!(linear_factor(Category::Length, "kilometers"), None);
        assert_eq!(linear_factor(Category::Length, "Grams"), None);
    }

    #[test]
    fn test_temperature_and_custom_have_no_factors() {
        assert!(linear_units(Category::Temperature).is_empty());
        assert!(linear_units(Category::Custom).is_empty());
    }

    #[test]
    fn test_builtin_unit_names() {
        assert_eq!(
            builtin_unit_names(Category::Temperature),
            vec!["Celsius", "Fahrenheit", "Kelvin"]
        );
        assert_eq!(
            builtin_unit_names(Category::Speed),
            vec!["Meters/Second", "Kilometers/Hour", "Miles/Hour", "Feet/Second"]
        );
        assert!(builtin_unit_names(Category::Custom).is_empty());
    }
}
