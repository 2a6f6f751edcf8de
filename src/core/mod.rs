// src/core/mod.rs

pub mod bootstrap;
pub mod capability;
pub mod cli;
pub mod error;
pub mod format;
pub mod probe;
pub mod report;
