// src/modules/hardware/info.rs

use super::memory::MemoryProbe;
use super::processor::ProcessorProbe;
use crate::core::error::Result;
use crate::core::format::FactSet;
use crate::core::probe::Probe;

/// Memory and processor facts flattened into one category.
#[derive(Debug, Clone, Copy)]
pub struct HardwareProbe {
    memory: MemoryProbe,
    processor: ProcessorProbe,
}

impl HardwareProbe {
    pub fn new(memory_reporting: bool) -> Self {
        HardwareProbe {
            memory: MemoryProbe::new(memory_reporting),
            processor: ProcessorProbe::new(),
        }
    }

    pub fn memory(&self) -> &MemoryProbe {
        &self.memory
    }

    pub fn processor(&self) -> &ProcessorProbe {
        &self.processor
    }
}

// Prefixes every fact of a sub-probe with its lowercased category.
fn flatten_into(facts: &mut FactSet, probe: &dyn Probe) -> Result<()> {
    let prefix = probe.key();
    for (key, value) in probe.facts()? {
        facts.insert(format!("{}_{}", prefix, key), value);
    }
    Ok(())
}

impl Probe for HardwareProbe {
    fn category(&self) -> &'static str {
        "Hardware"
    }

    fn facts(&self) -> Result<FactSet> {
        let mut facts = FactSet::new();
        flatten_into(&mut facts, &self.memory)?;
        flatten_into(&mut facts, &self.processor)?;
        Ok(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::NOT_AVAILABLE;

    #[test]
    fn keys_are_flattened_in_order() {
        let facts = HardwareProbe::new(false).facts().unwrap();
        let keys: Vec<&str> = facts.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "memory_installed",
                "memory_available",
                "processor_type",
                "processor_cores"
            ]
        );
        assert_eq!(facts["memory_installed"], NOT_AVAILABLE);
    }

    #[test]
    fn rendered_block_is_aligned() {
        let rendered = HardwareProbe::new(false).render().unwrap();
        let columns: Vec<usize> = rendered
            .lines()
            .filter_map(|line| line.find(" : "))
            .collect();
        assert_eq!(columns.len(), 4);
        assert!(columns.iter().all(|&c| c == columns[0]));
    }
}
