/* src/modules/drives/volumes.rs */

use crate::core::error::{Error, Result};
use crate::core::format::{FactSet, NOT_AVAILABLE};
use crate::core::probe::Probe;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use std::env::consts;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

const SUPPORTED_OS: &str = "windows";
const MOUNTVOL: &str = "mountvol";

/// Whether this host can enumerate drive letters. Decided once at startup.
#[derive(Debug, Clone)]
pub enum DrivesCapability {
    Supported(Drives),
    Unsupported,
}

impl DrivesCapability {
    pub fn detect() -> Self {
        if consts::OS != SUPPORTED_OS {
            return DrivesCapability::Unsupported;
        }
        DrivesCapability::Supported(Drives::from_mask(logical_drive_mask()))
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, DrivesCapability::Supported(_))
    }

    /// The drives, or an explicit mismatch error on unsupported hosts.
    pub fn drives(&self) -> Result<&Drives> {
        match self {
            DrivesCapability::Supported(drives) => Ok(drives),
            DrivesCapability::Unsupported => Err(Error::PlatformMismatch {
                component: "drives",
                supported: SUPPORTED_OS,
                current: consts::OS,
            }),
        }
    }
}

#[cfg(windows)]
fn logical_drive_mask() -> u32 {
    use windows::Win32::Storage::FileSystem::GetLogicalDrives;

    unsafe { GetLogicalDrives() }
}

#[cfg(not(windows))]
fn logical_drive_mask() -> u32 {
    0
}

/// Drive roots (`C:\`, `D:\`, ...) known to the host, in letter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drives {
    roots: Vec<PathBuf>,
}

impl Drives {
    /// Decodes the logical drive bitmask: bit 0 is `A`, bit 25 is `Z`.
    pub fn from_mask(mask: u32) -> Self {
        let roots = (b'A'..=b'Z')
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, letter)| PathBuf::from(format!("{}:\\", letter as char)))
            .collect();
        Drives { roots }
    }

    pub fn from_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Drives {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(PathBuf::as_path)
    }

    /// Locally mounted volumes as listed by `mountvol`.
    pub fn mounted(&self) -> Result<Vec<String>> {
        let output = Command::new(MOUNTVOL)
            .arg("/")
            .output()
            .map_err(|e| Error::subprocess(MOUNTVOL, e.to_string()))?;
        // mountvol exits non-zero after printing usage; the listing is still there.
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_mountvol(&stdout))
    }

    /// First root under which `fragment` exists.
    pub fn find(&self, fragment: impl AsRef<Path>) -> Option<&Path> {
        let fragment = fragment.as_ref();
        self.iter().find(|root| root.join(fragment).exists())
    }
}

impl fmt::Display for Drives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots: Vec<String> = self.iter().map(|r| r.display().to_string()).collect();
        write!(f, "[{}]", roots.join(", "))
    }
}

pub fn parse_mountvol(output: &str) -> Vec<String> {
    static RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?m)[A-Z]+:.*$").expect("mount point pattern is valid"));
    RE.find_iter(output)
        .map(|m| m.as_str().trim_end().to_string())
        .collect()
}

impl Probe for Drives {
    fn category(&self) -> &'static str {
        "Drives"
    }

    // Each root is "local" when mountvol lists it, "network" otherwise.
    fn facts(&self) -> Result<FactSet> {
        let mounted = self.mounted().ok();
        let mut facts = FactSet::new();
        for root in self.iter() {
            let root = root.display().to_string();
            let kind = match &mounted {
                Some(list) if list.iter().any(|m| *m == root) => "local",
                Some(_) => "network",
                None => NOT_AVAILABLE,
            };
            facts.insert(root, json!(kind));
        }
        Ok(facts)
    }
}
