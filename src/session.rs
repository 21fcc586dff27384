//! One user's converter state: a unit registry and a history log.
//!
//! A presentation layer owns a `Session` and calls into it for every request;
//! nothing is shared between sessions.

use crate::config::Settings;
use crate::converter::{ConversionResult, UnitRegistry};
use crate::history::HistoryLog;
use crate::models::{Category, HistoryEntry};

#[derive(Debug, Clone)]
pub struct Session {
    registry: UnitRegistry,
    history: HistoryLog,
    precision: Option<usize>,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            registry: UnitRegistry::new(),
            history: HistoryLog::with_capacity(settings.history_capacity),
            precision: settings.precision,
        }
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Convert and, only on success, record the formatted entry
    pub fn convert_and_record(
        &mut self,
        category: Category,
        value: f64,
        from: &str,
        to: &str,
    ) -> ConversionResult<HistoryEntry> {
        let converted = self.registry.convert(category, value, from, to)?;
        let entry = HistoryEntry::new(category, value, from, converted, to, self.precision);
        self.history.record(entry.clone());
        Ok(entry)
    }

    pub fn add_custom_unit(&mut self, from: &str, to: &str, factor: f64) -> ConversionResult<()> {
        self.registry.add_custom_unit(from, to, factor)
    }

    /// The last `n` recorded conversions, oldest first
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.history.recent(n)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
