// src/core/capability.rs

use crate::common::env::{self, Config};
use crate::modules::drives::volumes::DrivesCapability;
use crate::modules::system::session::{self, SessionResolver};

/// What the host can report, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub memory_reporting: bool,
    pub drives: DrivesCapability,
    pub session: SessionResolver,
}

impl Capabilities {
    /// Detects everything from the host, honouring the loaded environment.
    pub fn detect() -> Self {
        Capabilities::from_config(&env::CONFIG)
    }

    pub fn from_config(config: &Config) -> Self {
        Capabilities {
            memory_reporting: config.memory_reporting.resolve(sysinfo::IS_SUPPORTED_SYSTEM),
            drives: DrivesCapability::detect(),
            session: session::login_name,
        }
    }

    /// Capabilities with every optional provider switched off.
    pub fn minimal() -> Self {
        Capabilities {
            memory_reporting: false,
            drives: DrivesCapability::Unsupported,
            session: session::login_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::env::Toggle;

    #[test]
    fn config_overrides_detection() {
        let mut config = Config::default();

        config.memory_reporting = Toggle::Off;
        assert!(!Capabilities::from_config(&config).memory_reporting);

        config.memory_reporting = Toggle::On;
        assert!(Capabilities::from_config(&config).memory_reporting);
    }

    #[test]
    fn auto_follows_the_host() {
        let caps = Capabilities::from_config(&Config::default());
        assert_eq!(caps.memory_reporting, sysinfo::IS_SUPPORTED_SYSTEM);
    }

    #[test]
    fn detect_reads_the_loaded_environment() {
        let expected = env::CONFIG
            .memory_reporting
            .resolve(sysinfo::IS_SUPPORTED_SYSTEM);
        assert_eq!(Capabilities::detect().memory_reporting, expected);
    }

    #[test]
    fn minimal_has_nothing_optional() {
        let caps = Capabilities::minimal();
        assert!(!caps.memory_reporting);
        assert!(!caps.drives.is_supported());
    }
}
