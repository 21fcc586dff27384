use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::utils::format::format_value;

/// A single successful conversion, formatted once at creation and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub converted: f64,
    pub to_unit: String,
    /// `"{value} {from_unit} = {converted} {to_unit}"`
    pub display: String,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        category: Category,
        value: f64,
        from_unit: &str,
        converted: f64,
        to_unit: &str,
        precision: Option<usize>,
    ) -> Self {
        let display = format!(
            "{} {} = {} {}",
            format_value(value, precision),
            from_unit,
            format_value(converted, precision),
            to_unit
        );

        Self {
            category,
            value,
            from_unit: from_unit.to_string(),
            converted,
            to_unit: to_unit.to_string(),
            display,
            recorded_at: Utc::now(),
        }
    }
}
