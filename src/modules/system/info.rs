/* src/modules/system/info.rs */

use super::session::{self, SessionResolver};
use crate::core::error::Result;
use crate::core::format::{FactSet, UNKNOWN};
use crate::core::probe::Probe;
use serde_json::json;
use std::env::consts;
use sysinfo::System;

/// Operating system identity plus the current host and session.
#[derive(Debug, Clone, Copy)]
pub struct SystemProbe {
    session: SessionResolver,
}

impl Default for SystemProbe {
    fn default() -> Self {
        SystemProbe::new()
    }
}

impl SystemProbe {
    pub fn new() -> Self {
        SystemProbe::with_session(session::login_name)
    }

    /// Same facts, with the username taken from `resolver`.
    pub fn with_session(resolver: SessionResolver) -> Self {
        SystemProbe { session: resolver }
    }

    /// Platform family, spelled the way the vendor spells its kernel.
    pub fn os(&self) -> String {
        os_family(consts::OS)
    }

    pub fn release(&self) -> String {
        if cfg!(windows) {
            System::os_version().unwrap_or_else(|| UNKNOWN.to_string())
        } else {
            System::kernel_version().unwrap_or_else(|| UNKNOWN.to_string())
        }
    }

    pub fn machine(&self) -> String {
        System::cpu_arch()
            .filter(|arch| !arch.trim().is_empty())
            .unwrap_or_else(|| consts::ARCH.to_string())
    }

    pub fn architecture(&self) -> String {
        format!("{}bit", usize::BITS)
    }

    pub fn hostname(&self) -> String {
        System::host_name().unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn username(&self) -> Result<String> {
        (self.session)()
    }
}

fn os_family(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "dragonfly" => "DragonFly".to_string(),
        "solaris" | "illumos" => "SunOS".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => UNKNOWN.to_string(),
            }
        }
    }
}

impl Probe for SystemProbe {
    fn category(&self) -> &'static str {
        "System"
    }

    fn facts(&self) -> Result<FactSet> {
        let mut facts = FactSet::new();
        facts.insert("os".into(), json!(self.os()));
        facts.insert("release".into(), json!(self.release()));
        facts.insert("machine".into(), json!(self.machine()));
        facts.insert("architecture".into(), json!(self.architecture()));
        facts.insert("hostname".into(), json!(self.hostname()));
        facts.insert("username".into(), json!(self.username()?));
        Ok(facts)
    }
}
