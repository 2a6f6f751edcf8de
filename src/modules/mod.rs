// src/modules/mod.rs

pub mod drives;
pub mod hardware;
pub mod packages;
pub mod runtime;
pub mod system;
