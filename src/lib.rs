//! Collect and format static facts about the host environment.
//!
//! ```no_run
//! use hostfacts::EnvironmentReport;
//!
//! let report = EnvironmentReport::new();
//! print!("{}", report.render().unwrap());
//! ```

pub mod common;
pub mod core;
pub mod modules;

pub use crate::core::capability::Capabilities;
pub use crate::core::error::{Error, Result};
pub use crate::core::format::{FactSet, format_size, try_format_size};
pub use crate::core::probe::Probe;
pub use crate::core::report::{Categories, EnvironmentReport};
pub use crate::modules::drives::volumes::{Drives, DrivesCapability};
pub use crate::modules::hardware::{
    info::HardwareProbe, memory::MemoryProbe, processor::ProcessorProbe,
};
pub use crate::modules::packages::freeze::{PackageManager, Packages};
pub use crate::modules::runtime::version::RuntimeProbe;
pub use crate::modules::system::info::SystemProbe;
pub use crate::modules::system::session::SessionResolver;
