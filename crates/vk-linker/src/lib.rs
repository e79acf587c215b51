/*
[INPUT]:  Public API exports for vk-linker crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod error;
pub mod link;
pub mod processor;

// Re-export main types for convenience
pub use crate::config::{ConfigError, LinkerConfig};
pub use crate::error::{FailureKind, LinkerError};
pub use crate::processor::{LinkProcessor, Outcome, process_with, run};
