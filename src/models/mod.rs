//! Data models for the unit converter.
//!
//! - [`Category`] - The fixed set of unit categories, in display order
//! - [`ConversionDescriptor`] - How a unit relates to the rest of its category
//! - [`HistoryEntry`] - A recorded conversion with its formatted display text

pub mod category;
pub mod history;

pub use category::{Category, ConversionDescriptor};
pub use history::HistoryEntry;
