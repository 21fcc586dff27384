//! Per-session unit registry.
//!
//! Holds the built-in categories plus the mutable Custom category. A registry
//! is owned by one session; nothing here is process-wide.
//!
//! # Custom units and anchors
//!
//! `add_custom_unit(from, to, factor)` stores `from` with factor 1 and `to`
//! with `factor`, both anchored to `from`. Units only convert to units that
//! share their anchor: two registrations with different `from` names create
//! two unrelated groups, and converting across them is rejected with
//! [`ConversionError::IncompatibleCustomUnits`].

use tracing::debug;

use super::error::{ConversionError, ConversionResult};
use super::table::{builtin_unit_names, linear_factor};
use super::temperature::{TemperatureScale, convert_temperature};
use crate::models::{Category, ConversionDescriptor};

/// A user-registered unit in the Custom category
#[derive(Debug, Clone, PartialEq)]
pub struct CustomUnit {
    pub name: String,
    /// Factor relative to `anchor` (the anchor itself has factor 1)
    pub factor: f64,
    pub anchor: String,
}

#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    custom: Vec<CustomUnit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories in display order
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Unit names of a category in insertion order, including custom additions
    pub fn units(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Custom => self.custom.iter().map(|unit| unit.name.as_str()).collect(),
            _ => builtin_unit_names(category),
        }
    }

    pub fn custom_units(&self) -> &[CustomUnit] {
        &self.custom
    }

    pub fn contains_unit(&self, category: Category, unit: &str) -> bool {
        self.units(category).contains(&unit)
    }

    /// Case-insensitive unit lookup returning the canonical name
    pub fn resolve_unit(&self, category: Category, name: &str) -> Option<&str> {
        let name = name.trim();
        let units = self.units(category);
        units
            .iter()
            .find(|unit| **unit == name)
            .or_else(|| units.iter().find(|unit| unit.eq_ignore_ascii_case(name)))
            .copied()
    }

    /// First built-in category (display order) that contains both units
    pub fn find_category(&self, from: &str, to: &str) -> Option<Category> {
        Category::ALL.into_iter().filter(|c| *c != Category::Custom).find(|category| {
            self.resolve_unit(*category, from).is_some()
                && self.resolve_unit(*category, to).is_some()
        })
    }

    /// Conversion descriptor of a unit, matched by exact name
    pub fn descriptor(
        &self,
        category: Category,
        unit: &str,
    ) -> ConversionResult<ConversionDescriptor> {
        match category {
            Category::Temperature => {
                unit.parse::<TemperatureScale>().map(ConversionDescriptor::Temperature)
            }
            Category::Custom => {
                self.custom_unit(unit).map(|custom| ConversionDescriptor::Factor(custom.factor))
            }
            _ => self.builtin_factor(category, unit).map(ConversionDescriptor::Factor),
        }
    }

    /// Convert `value` from one unit to another within a category.
    ///
    /// Temperature uses the affine formula table; every other category computes
    /// `value * (factor[to] / factor[from])`. No rounding is applied.
    pub fn convert(
        &self,
        category: Category,
        value: f64,
        from: &str,
        to: &str,
    ) -> ConversionResult<f64> {
        if !value.is_finite() {
            return Err(ConversionError::NonFiniteValue(value));
        }

        let result = match category {
            Category::Temperature => {
                let from_scale: TemperatureScale = from.parse()?;
                let to_scale: TemperatureScale = to.parse()?;
                convert_temperature(value, from_scale, to_scale)
            }
            Category::Custom => {
                let from_unit = self.custom_unit(from)?;
                let to_unit = self.custom_unit(to)?;
                if from_unit.anchor != to_unit.anchor {
                    return Err(ConversionError::IncompatibleCustomUnits {
                        from: from_unit.name.clone(),
                        to: to_unit.name.clone(),
                        from_anchor: from_unit.anchor.clone(),
                        to_anchor: to_unit.anchor.clone(),
                    });
                }
                value * (to_unit.factor / from_unit.factor)
            }
            _ => {
                let from_factor = self.builtin_factor(category, from)?;
                let to_factor = self.builtin_factor(category, to)?;
                value * (to_factor / from_factor)
            }
        };

        debug!(%category, value, from, to, result, "Converted value");
        Ok(result)
    }

    /// Register `to = from * factor` in the Custom category.
    ///
    /// Existing units with the same names are redefined in place. On error the
    /// table is left unchanged.
    pub fn add_custom_unit(&mut self, from: &str, to: &str, factor: f64) -> ConversionResult<()> {
        let from = validate_unit_name(from)?;
        let to = validate_unit_name(to)?;

        if from == to {
            return Err(ConversionError::InvalidCustomUnitInput(format!(
                "'{}' cannot be defined relative to itself",
                from
            )));
        }
        if !factor.is_finite() {
            return Err(ConversionError::InvalidCustomUnitInput(format!(
                "factor must be a finite number, got {}",
                factor
            )));
        }
        if factor == 0.0 {
            return Err(ConversionError::InvalidCustomUnitInput(
                "factor cannot be zero".to_string(),
            ));
        }

        let anchor = from.to_string();
        self.upsert_custom(CustomUnit {
            name: anchor.clone(),
            factor: 1.0,
            anchor: anchor.clone(),
        });
        self.upsert_custom(CustomUnit { name: to.to_string(), factor, anchor });

        debug!(from, to, factor, "Registered custom unit");
        Ok(())
    }

    fn upsert_custom(&mut self, unit: CustomUnit) {
        match self.custom.iter_mut().find(|existing| existing.name == unit.name) {
            Some(existing) => *existing = unit,
            None => self.custom.push(unit),
        }
    }

    fn custom_unit(&self, name: &str) -> ConversionResult<&CustomUnit> {
        self.custom.iter().find(|unit| unit.name == name).ok_or_else(|| {
            ConversionError::UnknownUnit { category: Category::Custom, unit: name.to_string() }
        })
    }

    fn builtin_factor(&self, category: Category, unit: &str) -> ConversionResult<f64> {
        linear_factor(category, unit)
            .ok_or_else(|| ConversionError::UnknownUnit { category, unit: unit.to_string() })
    }
}

/// Trim a unit name and reject empty names or names with control characters
fn validate_unit_name(name: &str) -> ConversionResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidCustomUnitInput(
            "unit name cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(ConversionError::InvalidCustomUnitInput(format!(
            "unit name {:?} contains control characters",
            trimmed
        )));
    }
    Ok(trimmed)
}
