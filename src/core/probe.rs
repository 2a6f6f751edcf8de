// src/core/probe.rs

use crate::core::error::Result;
use crate::core::format::{self, FactSet};

/// A source of one category of environment facts.
///
/// Implementors only supply the category name and the facts; rendering is
/// shared so every category lines up the same way.
pub trait Probe {
    /// Display name of the category, e.g. "System".
    fn category(&self) -> &'static str;

    /// Queries the host and returns the facts in display order.
    fn facts(&self) -> Result<FactSet>;

    /// Key used for this category in structured exports.
    fn key(&self) -> String {
        self.category().to_lowercase()
    }

    fn render(&self) -> Result<String> {
        Ok(format::render_block(self.category(), &self.facts()?))
    }
}
