// src/modules/hardware/memory.rs

use crate::core::error::Result;
use crate::core::format::{self, FactSet, NOT_AVAILABLE};
use crate::core::probe::Probe;
use serde_json::json;
use std::fmt;
use sysinfo::System;

/// Installed and available physical memory.
///
/// When the host cannot report memory statistics, every fact carries the
/// `N/A` marker instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct MemoryProbe {
    reporting: bool,
}

impl MemoryProbe {
    pub fn new(reporting: bool) -> Self {
        MemoryProbe { reporting }
    }

    pub fn installed(&self) -> String {
        self.read(|sys| sys.total_memory())
    }

    pub fn available(&self) -> String {
        self.read(|sys| sys.available_memory())
    }

    fn read(&self, counter: impl Fn(&System) -> u64) -> String {
        if !self.reporting {
            return NOT_AVAILABLE.to_string();
        }
        let mut sys = System::new();
        sys.refresh_memory();
        human_size(counter(&sys))
    }
}

fn human_size(num_bytes: u64) -> String {
    format::format_size(u128::from(num_bytes), true, true)
}

impl fmt::Display for MemoryProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.installed())
    }
}

impl Probe for MemoryProbe {
    fn category(&self) -> &'static str {
        "Memory"
    }

    fn facts(&self) -> Result<FactSet> {
        let mut facts = FactSet::new();
        facts.insert("installed".into(), json!(self.installed()));
        facts.insert("available".into(), json!(self.available()));
        Ok(facts)
    }
}
