// src/modules/runtime/version.rs

use crate::core::error::Result;
use crate::core::format::{FactSet, UNKNOWN};
use crate::core::probe::Probe;
use serde_json::json;

// Captured by build.rs from the compiler that built this binary.
const RUSTC_VERSION: Option<&str> = option_env!("HOSTFACTS_RUSTC_VERSION");
const RUSTC_COMPILER: Option<&str> = option_env!("HOSTFACTS_RUSTC_COMPILER");

/// Version and toolchain of the Rust runtime the binary was built with.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuntimeProbe;

impl RuntimeProbe {
    pub fn new() -> Self {
        RuntimeProbe
    }

    pub fn version(&self) -> &'static str {
        RUSTC_VERSION.unwrap_or(UNKNOWN)
    }

    pub fn compiler(&self) -> &'static str {
        RUSTC_COMPILER.unwrap_or(UNKNOWN)
    }
}

impl Probe for RuntimeProbe {
    fn category(&self) -> &'static str {
        "Runtime"
    }

    fn facts(&self) -> Result<FactSet> {
        let mut facts = FactSet::new();
        facts.insert("version".into(), json!(self.version()));
        facts.insert("compiler".into(), json!(self.compiler()));
        Ok(facts)
    }
}
