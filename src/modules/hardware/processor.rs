// src/modules/hardware/processor.rs

use crate::core::error::Result;
use crate::core::format::{FactSet, UNKNOWN};
use crate::core::probe::Probe;
use serde_json::json;
use std::fmt;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessorProbe;

impl ProcessorProbe {
    pub fn new() -> Self {
        ProcessorProbe
    }

    /// CPU brand string, e.g. "AMD Ryzen 7 5800X 8-Core Processor".
    pub fn kind(&self) -> String {
        let sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
        sys.cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Logical core count; always at least one.
    pub fn cores(&self) -> usize {
        num_cpus::get().max(1)
    }
}

impl fmt::Display for ProcessorProbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind())
    }
}

impl Probe for ProcessorProbe {
    fn category(&self) -> &'static str {
        "Processor"
    }

    fn facts(&self) -> Result<FactSet> {
        let mut facts = FactSet::new();
        facts.insert("type".into(), json!(self.kind()));
        facts.insert("cores".into(), json!(self.cores()));
        Ok(facts)
    }
}
