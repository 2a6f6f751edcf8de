// src/common/env.rs

use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env;

pub const DEFAULT_PACKAGE_COMMAND: &str = "pip freeze";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Auto,
    On,
    Off,
}

impl Toggle {
    fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "on" | "true" | "1" | "yes" => Toggle::On,
            "off" | "false" | "0" | "no" => Toggle::Off,
            _ => Toggle::Auto,
        }
    }

    /// Resolves the toggle against what the host was detected to support.
    pub fn resolve(self, detected: bool) -> bool {
        match self {
            Toggle::Auto => detected,
            Toggle::On => true,
            Toggle::Off => false,
        }
    }
}

// Holds all configuration variables for the application.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub memory_reporting: Toggle,
    pub package_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::from_lookup(|_| None)
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key/value source; missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let memory_reporting = lookup("MEMORY_REPORTING")
            .map(|value| Toggle::from_str(&value))
            .unwrap_or(Toggle::Auto);
        let package_command = lookup("PACKAGE_COMMAND")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PACKAGE_COMMAND.to_string());
        Config {
            log_level,
            memory_reporting,
            package_command,
        }
    }
}

// Use lazy_static to create a globally accessible, read-only CONFIG instance.
lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

pub fn load() {
    let _ = &CONFIG.log_level;
}
