pub mod info;
pub mod memory;
pub mod processor;
