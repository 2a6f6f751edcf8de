// src/core/report.rs

use crate::core::capability::Capabilities;
use crate::core::error::Result;
use crate::core::probe::Probe;
use crate::modules::drives::volumes::DrivesCapability;
use crate::modules::hardware::info::HardwareProbe;
use crate::modules::runtime::version::RuntimeProbe;
use crate::modules::system::info::SystemProbe;
use serde_json::{Map, Value};

/// Which categories a report includes. All false means all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Categories {
    pub runtime: bool,
    pub system: bool,
    pub hardware: bool,
}

impl Categories {
    pub fn all() -> Self {
        Categories {
            runtime: true,
            system: true,
            hardware: true,
        }
    }

    pub fn is_all(&self) -> bool {
        *self == Categories::all()
    }

    fn normalized(self) -> Self {
        if self == Categories::default() {
            Categories::all()
        } else {
            self
        }
    }
}

/// Every probe of the host in display order.
pub struct EnvironmentReport {
    probes: Vec<Box<dyn Probe>>,
}

impl Default for EnvironmentReport {
    fn default() -> Self {
        EnvironmentReport::new()
    }
}

impl EnvironmentReport {
    pub fn new() -> Self {
        EnvironmentReport::with_capabilities(&Capabilities::detect())
    }

    pub fn with_capabilities(caps: &Capabilities) -> Self {
        EnvironmentReport::select(caps, Categories::all())
    }

    /// Runtime, System and Hardware as selected; Drives joins a full report
    /// on hosts that support it.
    pub fn select(caps: &Capabilities, categories: Categories) -> Self {
        let categories = categories.normalized();
        let mut probes: Vec<Box<dyn Probe>> = Vec::new();
        if categories.runtime {
            probes.push(Box::new(RuntimeProbe::new()));
        }
        if categories.system {
            probes.push(Box::new(SystemProbe::with_session(caps.session)));
        }
        if categories.hardware {
            probes.push(Box::new(HardwareProbe::new(caps.memory_reporting)));
        }
        if let (true, DrivesCapability::Supported(drives)) = (categories.is_all(), &caps.drives) {
            probes.push(Box::new(drives.clone()));
        }
        EnvironmentReport { probes }
    }

    pub fn from_probes(probes: Vec<Box<dyn Probe>>) -> Self {
        EnvironmentReport { probes }
    }

    pub fn probes(&self) -> impl Iterator<Item = &dyn Probe> {
        self.probes.iter().map(|probe| probe.as_ref())
    }

    pub fn categories(&self) -> Vec<String> {
        self.probes().map(|probe| probe.key()).collect()
    }

    /// Every category's block, concatenated. Stops at the first failing probe.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        for probe in self.probes() {
            out.push_str(&probe.render()?);
        }
        Ok(out)
    }

    /// Category key to facts, in display order. Stops at the first failing probe.
    pub fn export(&self) -> Result<Map<String, Value>> {
        let mut export = Map::new();
        for probe in self.probes() {
            export.insert(probe.key(), Value::Object(probe.facts()?));
        }
        Ok(export)
    }
}
