// src/modules/packages/freeze.rs

use crate::common::env::DEFAULT_PACKAGE_COMMAND;
use crate::core::error::{Error, Result};
use crate::core::format::FactSet;
use crate::core::probe::Probe;
use serde_json::{json, Value};
use std::process::Command;

/// Command line used to list installed packages as `name==version` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    program: String,
    args: Vec<String>,
}

impl Default for PackageManager {
    fn default() -> Self {
        // The default command line is never empty.
        PackageManager::from_command_line(DEFAULT_PACKAGE_COMMAND).unwrap_or(PackageManager {
            program: "pip".to_string(),
            args: vec!["freeze".to_string()],
        })
    }
}

impl PackageManager {
    /// Splits a whitespace separated command line; `None` when it is blank.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(PackageManager {
            program,
            args: parts.collect(),
        })
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the package manager and parses its listing.
    pub fn list(&self) -> Result<Packages> {
        let command = self.command_line();
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| Error::subprocess(&command, format!("failed to run: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::subprocess(
                &command,
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| Error::subprocess(&command, "output is not valid UTF-8"))?;
        Packages::parse(&stdout).map_err(|line| {
            Error::subprocess(&command, format!("unrecognised line: {:?}", line))
        })
    }
}

/// Installed packages, name to version, in listing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Packages {
    entries: FactSet,
}

impl Packages {
    /// Parses `name==version` lines. Direct references (`name @ url`) keep
    /// the reference as the version. Blank and `#` lines are skipped.
    ///
    /// On failure the offending line is returned.
    pub fn parse(listing: &str) -> std::result::Result<Self, String> {
        let mut entries = FactSet::new();
        for line in listing.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, version) = line
                .split_once("==")
                .or_else(|| line.split_once(" @ "))
                .map(|(name, version)| (name.trim(), version.trim()))
                .filter(|(name, version)| !name.is_empty() && !version.is_empty())
                .ok_or_else(|| line.to_string())?;
            entries.insert(name.to_string(), json!(version));
        }
        Ok(Packages { entries })
    }

    /// Case-insensitive check for an installed package.
    pub fn installed(&self, name: &str) -> bool {
        self.entries
            .keys()
            .any(|installed| installed.eq_ignore_ascii_case(name))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(installed, _)| installed.eq_ignore_ascii_case(name))
            .and_then(|(_, version)| version.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str().unwrap_or_default()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.entries.clone())
    }
}

impl Probe for Packages {
    fn category(&self) -> &'static str {
        "Packages"
    }

    fn facts(&self) -> Result<FactSet> {
        Ok(self.entries.clone())
    }
}
